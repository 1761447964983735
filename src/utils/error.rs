use thiserror::Error;

#[derive(Error, Debug)]
pub enum UtilsError {
    #[error("Invalid duration '{input}'. Use a format like \"5s\", \"2m\", \"7h\", or \"90d\".")]
    InvalidDuration { input: String },

    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument { name: String, reason: String },

    #[error("Unsupported locale: {locale}")]
    UnsupportedLocale { locale: String },

    #[error("Unsupported currency: {currency}")]
    UnsupportedCurrency { currency: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Formatting,
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

impl UtilsError {
    pub fn invalid_argument(name: &str, reason: impl Into<String>) -> Self {
        UtilsError::InvalidArgument {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            UtilsError::InvalidDuration { .. } | UtilsError::InvalidArgument { .. } => {
                ErrorCategory::Input
            }
            UtilsError::UnsupportedLocale { .. }
            | UtilsError::UnsupportedCurrency { .. }
            | UtilsError::SerializationError(_) => ErrorCategory::Formatting,
            UtilsError::ConfigError { .. } | UtilsError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            UtilsError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Formatting => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            UtilsError::InvalidDuration { input } => {
                format!("Could not read '{}' as a duration", input)
            }
            UtilsError::InvalidArgument { name, reason } => {
                format!("The value given for {} is not usable: {}", name, reason)
            }
            UtilsError::UnsupportedLocale { locale } => {
                format!("Locale '{}' is not supported", locale)
            }
            UtilsError::UnsupportedCurrency { currency } => {
                format!("Currency '{}' is not supported", currency)
            }
            UtilsError::IoError(e) => format!("File access failed: {}", e),
            UtilsError::SerializationError(e) => format!("JSON processing failed: {}", e),
            UtilsError::ConfigError { message } => format!("Configuration problem: {}", message),
            UtilsError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            UtilsError::InvalidDuration { .. } => {
                "Combine a number with one of the units s, m, h or d, e.g. \"1h 30m\""
            }
            UtilsError::InvalidArgument { .. } => "Check the argument against the documented range",
            UtilsError::UnsupportedLocale { .. } => {
                "Use one of en-US, en-GB, de-DE, fr-FR, cs-CZ or ja-JP"
            }
            UtilsError::UnsupportedCurrency { .. } => "Use one of USD, EUR, GBP, JPY or CZK",
            UtilsError::IoError(_) => "Make sure the file exists and is readable",
            UtilsError::SerializationError(_) => "Make sure the input is valid JSON",
            UtilsError::ConfigError { .. } | UtilsError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and try again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, UtilsError>;
