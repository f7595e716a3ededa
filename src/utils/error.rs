use thiserror::Error;

#[derive(Error, Debug)]
pub enum TourError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("Arithmetic overflow: {operation}")]
    OverflowError { operation: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TourError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TourError::DivisionByZero => ErrorSeverity::Low,
            TourError::OverflowError { .. } | TourError::SerializationError(_) => {
                ErrorSeverity::Medium
            }
            TourError::ConfigError { .. }
            | TourError::InvalidConfigValueError { .. }
            | TourError::TomlError(_) => ErrorSeverity::High,
            TourError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TourError::DivisionByZero | TourError::OverflowError { .. } => {
                "Check the operands passed to the arithmetic helpers"
            }
            TourError::IoError(_) => {
                "Check that the output path is writable and the disk is not full"
            }
            TourError::SerializationError(_) => "Inspect the value being serialized",
            TourError::TomlError(_) => "Fix the syntax of the TOML configuration file",
            TourError::ConfigError { .. } | TourError::InvalidConfigValueError { .. } => {
                "Run with --help to see the accepted options and their defaults"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TourError::IoError(e) => format!("Could not write the output file: {}", e),
            TourError::InvalidConfigValueError { field, reason, .. } => {
                format!("Option '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    /// 依嚴重程度決定行程結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, TourError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_by_zero_message() {
        assert_eq!(TourError::DivisionByZero.to_string(), "division by zero");
    }

    #[test]
    fn test_exit_codes_follow_severity() {
        let io = TourError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
        assert_eq!(io.severity(), ErrorSeverity::Critical);
        assert_eq!(io.exit_code(), 3);

        let invalid = TourError::InvalidConfigValueError {
            field: "output_path".to_string(),
            value: String::new(),
            reason: "Path cannot be empty".to_string(),
        };
        assert_eq!(invalid.exit_code(), 1);
        assert_eq!(
            invalid.user_friendly_message(),
            "Option 'output_path' is invalid: Path cannot be empty"
        );
        assert_eq!(TourError::DivisionByZero.exit_code(), 0);
    }
}
