use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreetError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Config parsing error in {field}: {message}")]
    ConfigParseError { field: String, message: String },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Serialization,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GreetError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GreetError::IoError(_) => ErrorCategory::Io,
            GreetError::SerializationError(_) => ErrorCategory::Serialization,
            GreetError::ConfigParseError { .. }
            | GreetError::MissingConfigError { .. }
            | GreetError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            GreetError::IoError(_) => ErrorSeverity::Critical,
            GreetError::SerializationError(_) => ErrorSeverity::Medium,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            GreetError::IoError(_) => {
                "Check that the config file exists and is readable".to_string()
            }
            GreetError::SerializationError(_) => {
                "Retry with --format text".to_string()
            }
            GreetError::ConfigParseError { .. } => {
                "Make sure the config file is valid TOML".to_string()
            }
            GreetError::MissingConfigError { field } => {
                format!("Set `{}` in the config file or on the command line", field)
            }
            GreetError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of `{}`", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("Could not read configuration: {}", self),
            ErrorCategory::Serialization => format!("Could not render greeting: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
        }
    }

    /// Process exit code for this error, as used by the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, GreetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = GreetError::MissingConfigError {
            field: "greeting.text".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.exit_code(), 1);
        assert!(err.recovery_suggestion().contains("greeting.text"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.toml");
        let err: GreetError = io.into();
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.exit_code(), 3);
        assert!(err.user_friendly_message().contains("missing.toml"));
    }
}
