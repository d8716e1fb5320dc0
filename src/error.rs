//! Error handling for Hearth Orient
//!
//! Degenerate numeric input (zero-length directions, NaN components, matrices of
//! the wrong shape) is rejected here instead of silently propagating NaN through
//! every later rotation.

/// Main error type for Hearth Orient
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrientError {
    // Construction Errors
    #[error("Invalid matrix dimension: {dimension} (only 3x3 rotation matrices are supported)")]
    InvalidDimension { dimension: usize },

    #[error("Matrix length mismatch: expected {expected} elements, found {found}")]
    MatrixLength { expected: usize, found: usize },

    // Numeric Errors
    #[error("Zero-length input in {operation}")]
    ZeroLength { operation: String },

    #[error("Non-finite value in {context}")]
    NonFinite { context: String },

    // Configuration Errors
    #[error("Invalid config: {field} = {value} ({reason})")]
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Config parse error: {0}")]
    ConfigParse(String),

    #[error("IO error for {path}: {error}")]
    Io { path: String, error: String },
}

/// Type alias for Results in Hearth Orient
pub type OrientResult<T> = Result<T, OrientError>;

impl From<toml::de::Error> for OrientError {
    fn from(error: toml::de::Error) -> Self {
        OrientError::ConfigParse(error.to_string())
    }
}

/// Shorthand for the zero-length error raised by normalizing operations
pub fn zero_length(operation: &str) -> OrientError {
    log::warn!("[Orient] Rejected zero-length input in {}", operation);
    OrientError::ZeroLength {
        operation: operation.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OrientError::InvalidDimension { dimension: 4 };
        assert_eq!(
            err.to_string(),
            "Invalid matrix dimension: 4 (only 3x3 rotation matrices are supported)"
        );

        let err = OrientError::MatrixLength {
            expected: 9,
            found: 8,
        };
        assert_eq!(
            err.to_string(),
            "Matrix length mismatch: expected 9 elements, found 8"
        );
    }

    #[test]
    fn test_zero_length() {
        assert_eq!(
            zero_length("vector_normalize"),
            OrientError::ZeroLength {
                operation: "vector_normalize".to_string()
            }
        );
    }

    #[test]
    fn test_toml_error_conversion() {
        let parsed: Result<toml::Value, _> = toml::from_str("key = ");
        let err = OrientError::from(parsed.expect_err("incomplete TOML"));
        assert!(matches!(err, OrientError::ConfigParse(_)));
    }
}
