#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::script::{DEFAULT_SOURCE_TAG, DEFAULT_TARGET_TAG};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_path, validate_positive_number, validate_tag_key, validate_url, Validate,
};
use std::time::Duration;
use self::toml_config::TomlConfig;

pub const DEFAULT_OUTPUT_FILE: &str = "/etc/telegraf/add_account_name.star";
pub const DEFAULT_BROKER_URL: &str = "http://localhost:8222";
pub const BROKER_URL_ENV: &str = "NATS_METRICS_URL";

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapperConfig {
    pub broker_url: String,
    pub output_path: String,
    pub timeout_seconds: Option<u64>,
    pub source_tag: String,
    pub target_tag: String,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            broker_url: DEFAULT_BROKER_URL.to_string(),
            output_path: DEFAULT_OUTPUT_FILE.to_string(),
            timeout_seconds: None,
            source_tag: DEFAULT_SOURCE_TAG.to_string(),
            target_tag: DEFAULT_TARGET_TAG.to_string(),
        }
    }
}

impl MapperConfig {
    pub fn new(broker_url: impl Into<String>, output_path: impl Into<String>) -> Self {
        Self {
            broker_url: broker_url.into(),
            output_path: output_path.into(),
            ..Self::default()
        }
    }

    /// Overlays every value present in the config file.
    pub fn merge_file(mut self, file: &TomlConfig) -> Self {
        if let Some(url) = file.broker_url() {
            self.broker_url = url.to_string();
        }
        if let Some(path) = file.output_path() {
            self.output_path = path.to_string();
        }
        if let Some(timeout) = file.timeout_seconds() {
            self.timeout_seconds = Some(timeout);
        }
        if let Some(tag) = file.source_tag() {
            self.source_tag = tag.to_string();
        }
        if let Some(tag) = file.target_tag() {
            self.target_tag = tag.to_string();
        }
        self
    }
}

impl ConfigProvider for MapperConfig {
    fn broker_url(&self) -> &str {
        &self.broker_url
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    fn source_tag(&self) -> &str {
        &self.source_tag
    }

    fn target_tag(&self) -> &str {
        &self.target_tag
    }
}

impl Validate for MapperConfig {
    fn validate(&self) -> Result<()> {
        validate_url("url", &self.broker_url)?;
        validate_path("output", &self.output_path)?;
        if let Some(timeout) = self.timeout_seconds {
            validate_positive_number("timeout_seconds", timeout, 1)?;
        }
        validate_tag_key("script.source_tag", &self.source_tag)?;
        validate_tag_key("script.target_tag", &self.target_tag)?;
        Ok(())
    }
}
