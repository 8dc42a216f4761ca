use crate::utils::error::{Result, StorefrontError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(StorefrontError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(StorefrontError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(StorefrontError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(StorefrontError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(StorefrontError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(StorefrontError::ValidationError {
            message: format!("{} cannot be empty or whitespace-only", field_name),
        });
    }
    Ok(())
}

pub fn validate_email(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    // Deliberately loose: the server owns real address verification.
    let looks_like_address = value
        .split_once('@')
        .map(|(local, domain)| !local.is_empty() && !domain.is_empty())
        .unwrap_or(false);

    if !looks_like_address {
        return Err(StorefrontError::ValidationError {
            message: format!("{} is not a valid email address: {}", field_name, value),
        });
    }
    Ok(())
}
