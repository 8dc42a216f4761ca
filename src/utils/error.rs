use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Unexpected status {status} from {endpoint}")]
    StatusError { endpoint: String, status: u16 },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Processing error: {message}")]
    ProcessingError { message: String },
}

impl StorefrontError {
    /// Short message suitable for printing to a CLI user.
    pub fn user_friendly_message(&self) -> String {
        match self {
            StorefrontError::ApiError(e) => {
                format!("Could not reach the storefront API: {}", e)
            }
            StorefrontError::StatusError { endpoint, status } => {
                format!("The storefront API answered {} for {}", status, endpoint)
            }
            StorefrontError::ConfigError { message }
            | StorefrontError::ValidationError { message } => message.clone(),
            StorefrontError::InvalidConfigValueError { field, reason, .. } => {
                format!("Bad value for --{}: {}", field.replace('_', "-"), reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StorefrontError>;
