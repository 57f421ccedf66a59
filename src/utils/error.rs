// src/utils/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Initialization error: {0}")]
    Init(String),

    #[error("Server error: {0}")]
    Server(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Failure taxonomy of the upstream face/storage/index services.
///
/// Adapters collapse provider-specific error codes into this closed enum so
/// the HTTP layer never inspects error strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The service rejected the input itself (e.g. no usable face in the
    /// probe image).
    #[error("input rejected by upstream validation")]
    Validation,

    /// Any other upstream fault, carrying the service's message verbatim.
    #[error("{0}")]
    Upstream(String),
}
