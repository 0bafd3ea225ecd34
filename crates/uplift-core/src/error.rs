use thiserror::Error;

/// Top-level error type for the Uplift system.
///
/// Each variant wraps a subsystem-specific failure. Subsystem crates define
/// their own error types and implement `From<SubsystemError> for UpliftError`
/// so that the `?` operator works seamlessly across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum UpliftError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Session error: {0}")]
    Session(String),

    #[error("Inference error: {0}")]
    Inference(String),

    #[error("Archive error: {0}")]
    Archive(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for UpliftError {
    fn from(err: toml::de::Error) -> Self {
        UpliftError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for UpliftError {
    fn from(err: toml::ser::Error) -> Self {
        UpliftError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for UpliftError {
    fn from(err: serde_json::Error) -> Self {
        UpliftError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Uplift operations.
pub type Result<T> = std::result::Result<T, UpliftError>;
