use crate::utils::error::{MapperError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional on-disk configuration. Every section and key may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub broker: Option<BrokerConfig>,
    pub output: Option<OutputConfig>,
    pub script: Option<ScriptConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrokerConfig {
    pub url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScriptConfig {
    pub source_tag: Option<String>,
    pub target_tag: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| MapperError::ConfigError {
            message: format!(
                "failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MapperError::TomlError {
            message: e.to_string(),
        })
    }

    /// Replaces `${VAR}` with the value of the environment variable; unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MapperError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn broker_url(&self) -> Option<&str> {
        self.broker.as_ref().and_then(|b| b.url.as_deref())
    }

    pub fn timeout_seconds(&self) -> Option<u64> {
        self.broker.as_ref().and_then(|b| b.timeout_seconds)
    }

    pub fn output_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.path.as_deref())
    }

    pub fn source_tag(&self) -> Option<&str> {
        self.script.as_ref().and_then(|s| s.source_tag.as_deref())
    }

    pub fn target_tag(&self) -> Option<&str> {
        self.script.as_ref().and_then(|s| s.target_tag.as_deref())
    }
}
