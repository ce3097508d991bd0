use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LambdaError {
    #[error("Cannot parse element {index} ({value:?}) as an integer: {source}")]
    ParseError {
        index: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value {value:?} for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl LambdaError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LambdaError::ParseError { .. } => ErrorCategory::Input,
            LambdaError::ConfigError { .. }
            | LambdaError::InvalidConfigValueError { .. }
            | LambdaError::MissingConfigError { .. } => ErrorCategory::Configuration,
            LambdaError::IoError(_) | LambdaError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit status for this error: input 1, configuration 2, system 3.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input => 1,
            ErrorCategory::Configuration => 2,
            ErrorCategory::System => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            LambdaError::ParseError { value, .. } => format!(
                "Replace {:?} with a base-10 integer between {} and {}",
                value,
                i32::MIN,
                i32::MAX
            ),
            LambdaError::InvalidConfigValueError { field, .. } => {
                format!("Check the value of `{}` in the config file or on the command line", field)
            }
            LambdaError::MissingConfigError { field } => {
                format!("Add `{}` to the config file or pass it as a flag", field)
            }
            LambdaError::ConfigError { .. } => {
                "Make sure the config file exists and is valid TOML".to_string()
            }
            LambdaError::IoError(_) => "Check file paths and permissions".to_string(),
            LambdaError::SerializationError(_) => "Retry with --format text".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LambdaError::ParseError { index, value, .. } => {
                format!("Element #{} ({:?}) is not a valid integer", index, value)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LambdaError>;
