use thiserror::Error;

/// Domain-level errors
///
/// Only failures that prevent a complete output artifact live here. Row and
/// node level problems are absorbed with defaults and never reach this type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("File '{0}' not found")]
    InputNotFound(String),

    #[error("Failed to read '{path}': {reason}")]
    MalformedInput { path: String, reason: String },

    #[error("Failed to write '{path}': {reason}")]
    OutputFailed { path: String, reason: String },
}

impl DomainError {
    pub fn malformed(path: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::MalformedInput {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn output(path: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::OutputFailed {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_file() {
        let err = DomainError::InputNotFound("tags.csv".to_string());
        assert_eq!(err.to_string(), "File 'tags.csv' not found");
    }

    #[test]
    fn test_malformed_message_carries_cause() {
        let err = DomainError::malformed("udt.json", "expected value at line 1 column 1");
        assert_eq!(
            err.to_string(),
            "Failed to read 'udt.json': expected value at line 1 column 1"
        );
    }
}
