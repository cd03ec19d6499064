use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type AccountId = String;
pub type AccountName = String;

/// Name recorded for accounts whose JWT carries no name.
pub const UNKNOWN_ACCOUNT_NAME: &str = "unknown";

/// Account ID to display name, ordered by ID so rendering is deterministic.
pub type AccountMapping = BTreeMap<AccountId, AccountName>;

/// Body of `GET /accountz`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountList {
    #[serde(default)]
    pub accounts: Vec<AccountId>,
}

/// Body of `GET /accountz?acc={id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountInfo {
    #[serde(default)]
    pub account_detail: AccountDetail,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountDetail {
    #[serde(default)]
    pub decoded_jwt: DecodedJwt,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DecodedJwt {
    #[serde(default)]
    pub name: Option<String>,
}

impl AccountInfo {
    pub fn display_name(&self) -> AccountName {
        match self.account_detail.decoded_jwt.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => UNKNOWN_ACCOUNT_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub account_id: AccountId,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct MappingReport {
    pub mapping: AccountMapping,
    pub failures: Vec<FetchFailure>,
}

impl MappingReport {
    pub fn resolved(&self) -> usize {
        self.mapping.len()
    }

    pub fn skipped(&self) -> usize {
        self.failures.len()
    }
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub output_path: String,
    pub mappings_written: usize,
    pub accounts_skipped: usize,
}
