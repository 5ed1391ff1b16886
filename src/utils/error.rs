use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZooError {
    #[error("Input file not found: {path}")]
    InputNotFound { path: String },

    #[error("Failed to read {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Reported to the user, run ends without output.
    Low,
    High,
    Critical,
}

impl ZooError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ZooError::InputNotFound { .. } | ZooError::MissingConfigError { .. } => {
                ErrorSeverity::Low
            }
            ZooError::ConfigValidationError { .. }
            | ZooError::InvalidConfigValueError { .. }
            | ZooError::CsvError(_)
            | ZooError::SerializationError(_) => ErrorSeverity::High,
            ZooError::ReadError { .. } | ZooError::WriteError { .. } | ZooError::IoError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    /// Console text for the error, phrased per pipeline phase.
    pub fn user_friendly_message(&self) -> String {
        match self {
            ZooError::InputNotFound { path } => format!("Input file not found: {}", path),
            ZooError::ReadError { source, .. } => format!("Error reading the file: {}", source),
            ZooError::WriteError { source, .. } => {
                format!("Error writing the report: {}", source)
            }
            ZooError::MissingConfigError { .. } => {
                "Usage: zoo-report <input file> <output file>".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, ZooError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_is_not_a_failure() {
        let err = ZooError::InputNotFound {
            path: "animals.txt".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.exit_code(), 0);
        assert_eq!(err.user_friendly_message(), "Input file not found: animals.txt");
    }

    #[test]
    fn test_write_failure_message() {
        let err = ZooError::WriteError {
            path: "out/report.txt".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.exit_code(), 3);
        assert_eq!(err.user_friendly_message(), "Error writing the report: denied");
    }
}
