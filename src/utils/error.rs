use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapperError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Failed to fetch account IDs from {url}: {message}")]
    DiscoveryError { url: String, message: String },

    #[error("Failed to fetch details for account {account_id}: {message}")]
    AccountFetchError { account_id: String, message: String },

    #[error("Failed to write script to {path}: {message}")]
    WriteError { path: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("TOML parsing error: {message}")]
    TomlError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Broker,
    Storage,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl MapperError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MapperError::HttpError(_) => ErrorCategory::Network,
            MapperError::DiscoveryError { .. } | MapperError::AccountFetchError { .. } => {
                ErrorCategory::Broker
            }
            MapperError::SerializationError(_) => ErrorCategory::Broker,
            MapperError::IoError(_) | MapperError::WriteError { .. } => ErrorCategory::Storage,
            MapperError::ConfigError { .. }
            | MapperError::InvalidConfigValueError { .. }
            | MapperError::TomlError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // a single account can be skipped without failing the run
            MapperError::AccountFetchError { .. } => ErrorSeverity::Low,
            MapperError::HttpError(_)
            | MapperError::DiscoveryError { .. }
            | MapperError::SerializationError(_) => ErrorSeverity::Medium,
            MapperError::ConfigError { .. }
            | MapperError::InvalidConfigValueError { .. }
            | MapperError::TomlError { .. } => ErrorSeverity::High,
            MapperError::IoError(_) | MapperError::WriteError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Network => {
                "Check that the NATS monitoring port is reachable from this host".to_string()
            }
            ErrorCategory::Broker => {
                "Check that the broker exposes /accountz and that --url points at its monitoring port"
                    .to_string()
            }
            ErrorCategory::Storage => {
                "Check that the output directory exists and is writable".to_string()
            }
            ErrorCategory::Configuration => {
                "Review the command line flags and the config file".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MapperError::DiscoveryError { url, .. } => {
                format!("Could not list accounts from {}", url)
            }
            MapperError::AccountFetchError { account_id, .. } => {
                format!("Could not resolve the name of account {}", account_id)
            }
            MapperError::WriteError { path, .. } => {
                format!("Could not write the Starlark script to {}", path)
            }
            other => other.to_string(),
        }
    }

    /// Process exit status for a fatal error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, MapperError>;
