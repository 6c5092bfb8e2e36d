//! Error types for seolens

use thiserror::Error;

/// Result type alias using our custom Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for the seolens system
#[derive(Error, Debug)]
pub enum Error {
    /// Client input failed a request constraint. The message is safe to show the caller.
    #[error("{0}")]
    Validation(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Whether this error was caused by the caller's input rather than the system
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}
