use thiserror::Error;

#[derive(Error, Debug)]
pub enum KitError {
    #[error("Invalid date '{value}': {reason}")]
    FormatError { value: String, reason: String },

    #[error("Key function failed for element #{index}: {message}")]
    KeyError { index: usize, message: String },

    #[error("Invalid input: {message}")]
    InputError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
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
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit status for a failed command.
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Medium => 2,
            Self::High => 1,
            Self::Critical => 3,
        }
    }
}

impl KitError {
    pub fn format(value: &str, reason: impl Into<String>) -> Self {
        Self::FormatError {
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn input(message: impl Into<String>) -> Self {
        Self::InputError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FormatError { .. }
            | Self::KeyError { .. }
            | Self::InputError { .. }
            | Self::CsvError(_) => ErrorCategory::Input,
            Self::TomlError(_)
            | Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::FormatError { .. } => "Dates must look like MM/DD/YYYY with numeric parts",
            Self::KeyError { .. } => "Check that the key function accepts every element",
            Self::InputError { .. } | Self::CsvError(_) => {
                "Pass sequences as comma-separated values and matrix rows separated by ';'"
            }
            Self::TomlError(_) => "Check the config file for TOML syntax errors",
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => "Fix the reported field in the config file or CLI flags",
            Self::IoError(_) => "Make sure the file exists and is readable",
            Self::SerializationError(_) => "Re-run with --format text",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Bad input: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, KitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_message() {
        let err = KitError::format("1/2", "expected 3 parts, found 2");
        assert_eq!(err.to_string(), "Invalid date '1/2': expected 3 parts, found 2");
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = KitError::MissingConfigError {
            field: "output.format".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().starts_with("Configuration problem"));
    }

    #[test]
    fn test_every_failure_exits_non_zero() {
        let errors = [
            KitError::format("x", "bad"),
            KitError::KeyError {
                index: 0,
                message: "boom".to_string(),
            },
            KitError::input("bad"),
            KitError::ConfigError {
                message: "bad".to_string(),
            },
            std::io::Error::other("gone").into(),
        ];
        for err in errors {
            assert_ne!(err.severity().exit_code(), 0, "{}", err);
        }
        assert_eq!(ErrorSeverity::Medium.exit_code(), 2);
        assert_eq!(ErrorSeverity::High.exit_code(), 1);
        assert_eq!(ErrorSeverity::Critical.exit_code(), 3);
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: KitError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
