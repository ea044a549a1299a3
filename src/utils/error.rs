use crate::core::validation::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SorterError {
    #[error("Invalid package: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

impl SorterError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SorterError::ValidationError(_) => ErrorCategory::Input,
            SorterError::ConfigError { .. } | SorterError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            SorterError::IoError(_) | SorterError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SorterError::ValidationError(e) => format!("Package rejected before sorting: {}", e),
            SorterError::IoError(e) => format!("Could not read or write a file: {}", e),
            SorterError::SerializationError(e) => format!("Could not encode the result: {}", e),
            SorterError::ConfigError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            SorterError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for '{}': {}", value, field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => {
                "Provide width, height, length and mass as positive whole numbers"
            }
            ErrorCategory::Configuration => "Check the configuration file against the documented keys",
            ErrorCategory::System => "Check file permissions and that the path exists",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input => 2,
            ErrorCategory::Configuration | ErrorCategory::System => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, SorterError>;
