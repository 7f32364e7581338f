use thiserror::Error;

#[derive(Error, Debug)]
pub enum FareError {
    #[error("Invalid travel request: {field} = {value} ({reason})")]
    InvalidRequest {
        field: String,
        value: String,
        reason: String,
    },

    #[error("No pricing policy selected")]
    NoPolicySelected,

    #[error("Invalid transport selection: {input}")]
    InvalidSelection { input: String },

    #[error("Input error for {field}: {message}")]
    InputError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Request,
    Dispatch,
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 根據錯誤嚴重程度決定退出碼
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl FareError {
    pub fn invalid_request(field: &str, value: impl ToString, reason: &str) -> Self {
        FareError::InvalidRequest {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn input(field: &str, message: impl Into<String>) -> Self {
        FareError::InputError {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            FareError::InvalidRequest { .. } => ErrorCategory::Request,
            FareError::NoPolicySelected => ErrorCategory::Dispatch,
            FareError::InvalidSelection { .. } | FareError::InputError { .. } => {
                ErrorCategory::Input
            }
            FareError::ConfigError { .. } | FareError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            FareError::IoError(_) | FareError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Request | ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Dispatch => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Short message suitable for printing to the terminal.
    pub fn user_friendly_message(&self) -> String {
        match self {
            FareError::InvalidRequest { field, value, .. } => {
                format!("Invalid input data: {} must be positive (got {})", field, value)
            }
            FareError::NoPolicySelected => "No transport was selected".to_string(),
            FareError::InvalidSelection { input } => {
                format!("Selection error: '{}' is not a transport option", input)
            }
            FareError::InputError { field, message } => {
                format!("Could not read {}: {}", field, message)
            }
            FareError::ConfigError { message } => format!("Configuration problem: {}", message),
            FareError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            FareError::IoError(e) => format!("File or terminal error: {}", e),
            FareError::SerializationError(e) => format!("Could not encode result: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FareError::InvalidRequest { .. } => {
                "Enter a distance greater than 0 and at least one passenger"
            }
            FareError::NoPolicySelected => "Choose a transport mode before calculating",
            FareError::InvalidSelection { .. } => "Choose 1 (plane), 2 (train) or 3 (bus)",
            FareError::InputError { .. } => {
                "Numbers must be plain digits and flags must be true or false"
            }
            FareError::ConfigError { .. } | FareError::InvalidConfigValueError { .. } => {
                "Check the configuration file and command line flags"
            }
            FareError::IoError(_) => "Check file permissions and that the path exists",
            FareError::SerializationError(_) => "Retry without --json",
        }
    }
}

pub type Result<T> = std::result::Result<T, FareError>;
