use crate::domain::model::{AccountId, AccountName};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Where account IDs and names come from.
#[async_trait]
pub trait AccountSource: Send + Sync {
    async fn fetch_account_ids(&self) -> Result<Vec<AccountId>>;
    async fn fetch_account_name(&self, account_id: &str) -> Result<AccountName>;
}

pub trait ScriptStorage: Send + Sync {
    /// Replaces `path` with `data` so readers see either the old or the new file.
    fn write_atomic(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn broker_url(&self) -> &str;
    fn output_path(&self) -> &str;
    fn request_timeout(&self) -> Option<Duration>;
    fn source_tag(&self) -> &str;
    fn target_tag(&self) -> &str;
}
