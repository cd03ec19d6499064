use crate::domain::model::{AccountId, AccountInfo, AccountList, AccountName};
use crate::domain::ports::{AccountSource, ConfigProvider};
use crate::utils::error::{MapperError, Result};
use reqwest::Client;
use std::time::Duration;

/// Client for the NATS monitoring `/accountz` endpoint.
#[derive(Debug, Clone)]
pub struct AccountzClient {
    base_url: String,
    client: Client,
}

impl AccountzClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Builds a client whose requests give up after `timeout`; `None` waits indefinitely.
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::with_timeout(config.broker_url(), config.request_timeout())
    }

    pub fn accountz_url(&self) -> String {
        format!("{}/accountz", self.base_url)
    }
}

#[async_trait::async_trait]
impl AccountSource for AccountzClient {
    async fn fetch_account_ids(&self) -> Result<Vec<AccountId>> {
        let url = self.accountz_url();
        let discovery_error = |message: String| MapperError::DiscoveryError {
            url: url.clone(),
            message,
        };

        tracing::debug!("Fetching account IDs from {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| discovery_error(e.to_string()))?;

        let status = response.status();
        tracing::debug!("Account list response status: {}", status);
        if !status.is_success() {
            return Err(discovery_error(format!("HTTP status {}", status)));
        }

        let list: AccountList = response
            .json()
            .await
            .map_err(|e| discovery_error(format!("invalid account list: {}", e)))?;

        tracing::debug!("Broker reported {} accounts", list.accounts.len());
        Ok(list.accounts)
    }

    async fn fetch_account_name(&self, account_id: &str) -> Result<AccountName> {
        let fetch_error = |message: String| MapperError::AccountFetchError {
            account_id: account_id.to_string(),
            message,
        };

        let response = self
            .client
            .get(self.accountz_url())
            .query(&[("acc", account_id)])
            .send()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fetch_error(format!("HTTP status {}", status)));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| fetch_error(format!("failed to read body: {}", e)))?;
        let info: AccountInfo = serde_json::from_slice(&body)
            .map_err(|e| fetch_error(format!("invalid account detail: {}", e)))?;

        Ok(info.display_name())
    }
}
