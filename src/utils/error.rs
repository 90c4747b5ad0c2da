use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Unsupported catalog format '{extension}' for {path}")]
    UnsupportedFormat { path: String, extension: String },

    #[error("Invalid item '{id}': {reason}")]
    InvalidItem { id: String, reason: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code the CLI uses for a failure of this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl QueryError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            QueryError::IoError(_) => ErrorSeverity::Critical,
            QueryError::SerializationError(_)
            | QueryError::CsvError(_)
            | QueryError::TomlError(_)
            | QueryError::InvalidItem { .. } => ErrorSeverity::High,
            QueryError::UnsupportedFormat { .. } | QueryError::InvalidConfigValueError { .. } => {
                ErrorSeverity::Medium
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            QueryError::IoError(_) => "Check that the catalog file exists and is readable",
            QueryError::SerializationError(_) => "Make sure the catalog is a JSON array of items",
            QueryError::CsvError(_) => {
                "Make sure the CSV header is id,name,category,price,stock,is_active"
            }
            QueryError::TomlError(_) => "Make sure the catalog declares its items as [[items]] tables",
            QueryError::UnsupportedFormat { .. } => "Use a .json, .csv or .toml catalog file",
            QueryError::InvalidItem { .. } => {
                "Every item needs a non-empty id and name and a non-negative price"
            }
            QueryError::InvalidConfigValueError { .. } => "Fix the command line arguments and retry",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            QueryError::IoError(e) => format!("Could not read the catalog: {}", e),
            QueryError::UnsupportedFormat { path, extension } => {
                format!("Catalog '{}' has an unsupported format ({})", path, extension)
            }
            QueryError::InvalidItem { id, reason } => {
                format!("Catalog contains an invalid item '{}': {}", id, reason)
            }
            other => format!("{}", other),
        }
    }
}

pub type Result<T> = std::result::Result<T, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_mapping() {
        let io = QueryError::IoError(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.severity(), ErrorSeverity::Critical);
        assert_eq!(io.severity().exit_code(), 3);

        let invalid = QueryError::InvalidItem {
            id: "1".to_string(),
            reason: "negative price".to_string(),
        };
        assert_eq!(invalid.severity(), ErrorSeverity::High);
        assert_eq!(
            invalid.user_friendly_message(),
            "Catalog contains an invalid item '1': negative price"
        );
        assert_eq!(invalid.severity().exit_code(), 1);

        let unsupported = QueryError::UnsupportedFormat {
            path: "items.yaml".to_string(),
            extension: "yaml".to_string(),
        };
        assert_eq!(unsupported.severity(), ErrorSeverity::Medium);
        assert_eq!(unsupported.severity().exit_code(), 2);
    }
}
