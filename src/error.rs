//! Error handling module
//!
//! Crate-wide error type wrapping each layer's errors.

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Domain errors
    #[error(transparent)]
    Domain(#[from] crate::domain::DomainError),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}
