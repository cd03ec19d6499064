use crate::utils::error::{MapperError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(MapperError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(MapperError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(MapperError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(MapperError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(MapperError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(MapperError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// Tag keys are spliced into the script verbatim inside double quotes.
pub fn validate_tag_key(field_name: &str, key: &str) -> Result<()> {
    if key.trim().is_empty() {
        return Err(MapperError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: key.to_string(),
            reason: "Tag key cannot be empty or whitespace-only".to_string(),
        });
    }

    if let Some(c) = key.chars().find(|c| matches!(c, '"' | '\\' | '\n' | '\r')) {
        return Err(MapperError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: key.to_string(),
            reason: format!("Tag key contains forbidden character {:?}", c),
        });
    }

    Ok(())
}
