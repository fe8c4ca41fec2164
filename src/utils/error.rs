use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForgeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Run of '{subject}' did not succeed")]
    RunFailed { subject: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Execution,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ForgeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ForgeError::IoError(_) | ForgeError::SerializationError(_) => ErrorCategory::Io,
            ForgeError::ConfigError { .. } | ForgeError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            ForgeError::RunFailed { .. } => ErrorCategory::Execution,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ForgeError::SerializationError(_) => ErrorSeverity::Medium,
            ForgeError::ConfigError { .. }
            | ForgeError::InvalidConfigValueError { .. }
            | ForgeError::RunFailed { .. } => ErrorSeverity::High,
            ForgeError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ForgeError::IoError(e) => format!("Could not access a file: {}", e),
            ForgeError::SerializationError(_) => "Could not render the run report".to_string(),
            ForgeError::ConfigError { message } => format!("Configuration problem: {}", message),
            ForgeError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            ForgeError::RunFailed { subject } => format!("'{}' reported a failed run", subject),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the path exists and is readable",
            ErrorCategory::Configuration => "Fix the configuration file or command-line flags",
            ErrorCategory::Execution => "Re-run with --verbose to see the run log",
        }
    }
}

pub type Result<T> = std::result::Result<T, ForgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = ForgeError::InvalidConfigValueError {
            field: "forge.name".to_string(),
            value: " ".to_string(),
            reason: "empty".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("forge.name"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ForgeError = io.into();
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.recovery_suggestion(), "Check that the path exists and is readable");
    }

    #[test]
    fn test_serialization_error_is_medium() {
        let err: ForgeError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.category(), ErrorCategory::Io);
    }

    #[test]
    fn test_run_failed_display() {
        let err = ForgeError::RunFailed {
            subject: "chronoforge".to_string(),
        };
        assert_eq!(err.to_string(), "Run of 'chronoforge' did not succeed");
        assert_eq!(err.category(), ErrorCategory::Execution);
    }
}
