//! Error types for mincover

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// mincover errors
#[derive(Error, Debug)]
pub enum Error {
    /// Empty attribute set, or a blank attribute name
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// A functional dependency with more than one attribute on the right
    /// reached an operation that requires single-RHS input
    #[error("Precondition violated: {0}")]
    PreconditionViolation(String),

    #[error("{format} parse error: {message}")]
    Parse { format: String, message: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_norway::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Build a parse error for the given input format
    pub fn parse(format: impl ToString, message: impl Into<String>) -> Self {
        Error::Parse {
            format: format.to_string(),
            message: message.into(),
        }
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}
