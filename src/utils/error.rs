use thiserror::Error;

#[derive(Error, Debug)]
pub enum VaccinationError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid identifier '{value}': {reason}")]
    InvalidIdentifier { value: String, reason: String },

    #[error("Could not parse '{value}' as {field}")]
    ParseError { field: String, value: String },
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
    High,
    Critical,
}

impl VaccinationError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidIdentifier { .. } | Self::ParseError { .. } => ErrorCategory::Input,
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    /// Input errors are recoverable by re-prompting; config errors stop the
    /// session before it starts.
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::InvalidIdentifier { .. } => {
                "Enter the CPF as exactly 11 digits, without dots or dashes".to_string()
            }
            Self::ParseError { field, .. } => format!("Enter a valid {}", field),
            Self::ConfigError { .. } | Self::ConfigValidationError { .. } => {
                "Check that the configuration file exists and is valid TOML".to_string()
            }
            Self::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the configuration or CLI flags", field)
            }
            Self::IoError(_) => "Check terminal input/output and file permissions".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidIdentifier { .. } => "Invalid CPF! Try again.".to_string(),
            Self::ParseError { field, value } => format!("'{}' is not a valid {}", value, field),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            Self::IoError(e) => format!("Input/output failure: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, VaccinationError>;
