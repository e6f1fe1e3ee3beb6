/// Structured error types for trivia-core.
///
/// Library consumers get `thiserror` enums; the CLI wraps them in `anyhow`.

use thiserror::Error;

/// Main error type for trivia-core operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A value meant to be an integer identifier could not be read as one
    #[error("Invalid integer: '{0}'")]
    InvalidInteger(String),

    /// Integer is outside the 32-bit range used for identifiers
    #[error("Integer out of range: {0}")]
    OutOfRange(i64),
}

/// Result type alias for trivia-core operations
pub type Result<T> = std::result::Result<T, CoreError>;

impl CoreError {
    /// Create an invalid integer error
    pub fn invalid_integer(value: impl Into<String>) -> Self {
        Self::InvalidInteger(value.into())
    }
}
