//! Domain-specific error types and error handling.

mod types;

pub use types::{AuthError, TokenError, ValidationError};

use thiserror::Error;

/// Core domain errors
///
/// No variant carries a plaintext password, on any path.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Repository error: {message}")]
    Repository { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl DomainError {
    /// Stable error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::Repository { .. } => "REPOSITORY_ERROR",
            DomainError::Internal { .. } => "INTERNAL_ERROR",
            DomainError::Auth(err) => err.error_code(),
            DomainError::Token(err) => err.error_code(),
            DomainError::Validation(err) => err.error_code(),
        }
    }

    /// Whether the caller can correct the failure by changing its request
    pub fn is_client_error(&self) -> bool {
        match self {
            DomainError::Repository { .. } | DomainError::Internal { .. } => false,
            DomainError::Auth(err) => !matches!(err, AuthError::CredentialHashingFailed),
            DomainError::Token(err) => err.is_verification_failure(),
            DomainError::Validation(err) => {
                !matches!(err, ValidationError::InvalidPasswordPattern { .. })
            }
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
