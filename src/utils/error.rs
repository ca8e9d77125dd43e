use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl NotifyError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            NotifyError::IoError(e) => format!("Could not read input: {}", e),
            NotifyError::JsonError(e) => format!("Event document is not valid JSON: {}", e),
            NotifyError::TomlError(e) => format!("Configuration file is not valid TOML: {}", e),
            NotifyError::ConfigValidationError { field, message } => {
                format!("Configuration problem in {}: {}", field, message)
            }
            NotifyError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value {} is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            NotifyError::IoError(_) => "Check that the file exists and is readable",
            NotifyError::JsonError(_) => {
                "Provide an event with order_id, previous_status and an order object"
            }
            NotifyError::TomlError(_) => "Check the TOML syntax near the reported line",
            NotifyError::ConfigValidationError { .. }
            | NotifyError::InvalidConfigValueError { .. } => {
                "Fix the highlighted value and run `nalo-sms check-config` again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, NotifyError>;

/// Why a dispatch stopped before (or while) reaching the gateway.
///
/// None of these are surfaced to the order workflow as failures.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("status '{status}' is not enabled for notifications")]
    IneligibleStatus { status: String },

    #[error("no template configured for status '{status}'")]
    MissingTemplate { status: String },

    #[error("unrecognized phone format")]
    InvalidPhone,

    #[error("gateway credentials are not configured")]
    MissingCredentials,

    #[error("message is empty after sanitizing")]
    EmptyMessage,

    #[error("gateway request failed: {0}")]
    TransportFailure(#[from] reqwest::Error),
}
