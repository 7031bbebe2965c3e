//! Error types for credential validation, hashing and token operations
//!
//! Messages are short English strings; the presentation layer decides what is
//! shown to clients.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Email already registered")]
    UserAlreadyExists,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password hashing failed")]
    CredentialHashingFailed,
}

impl AuthError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::UserAlreadyExists => "USER_ALREADY_EXISTS",
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::CredentialHashingFailed => "CREDENTIAL_HASHING_FAILED",
        }
    }
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Signing key unavailable: {message}")]
    SigningKeyUnavailable { message: String },

    #[error("Invalid token lifetime: {seconds} seconds")]
    InvalidLifetime { seconds: i64 },

    #[error("Token generation failed")]
    TokenGenerationFailed,

    #[error("Missing required claim: {claim}")]
    MissingClaim { claim: String },

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Token expired")]
    TokenExpired,

    #[error("Token not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token claims")]
    InvalidClaims,

    #[error("Invalid token format")]
    InvalidTokenFormat,
}

impl TokenError {
    pub fn error_code(&self) -> &'static str {
        match self {
            TokenError::SigningKeyUnavailable { .. } => "SIGNING_KEY_UNAVAILABLE",
            TokenError::InvalidLifetime { .. } => "INVALID_LIFETIME",
            TokenError::TokenGenerationFailed => "TOKEN_GENERATION_FAILED",
            TokenError::MissingClaim { .. } => "MISSING_CLAIM",
            TokenError::InvalidSignature => "INVALID_SIGNATURE",
            TokenError::TokenExpired => "TOKEN_EXPIRED",
            TokenError::TokenNotYetValid => "TOKEN_NOT_YET_VALID",
            TokenError::InvalidClaims => "INVALID_CLAIMS",
            TokenError::InvalidTokenFormat => "INVALID_TOKEN_FORMAT",
        }
    }

    /// Failures reported by `verify`, as opposed to issuing-side failures
    pub fn is_verification_failure(&self) -> bool {
        matches!(
            self,
            TokenError::InvalidSignature
                | TokenError::TokenExpired
                | TokenError::TokenNotYetValid
                | TokenError::InvalidClaims
                | TokenError::InvalidTokenFormat
        )
    }

    /// The token was genuine but is outside its validity window; a fresh
    /// login recovers, whereas every other verify failure is a rejection.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(self, TokenError::TokenExpired | TokenError::TokenNotYetValid)
    }
}

/// Validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Password does not meet the required format")]
    PasswordPolicyViolation,

    #[error("Invalid password pattern: {reason}")]
    InvalidPasswordPattern { reason: String },

    #[error("Field required: {field}")]
    RequiredField { field: String },

    #[error("Invalid email format")]
    InvalidEmail,
}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::PasswordPolicyViolation => "PASSWORD_POLICY_VIOLATION",
            ValidationError::InvalidPasswordPattern { .. } => "INVALID_PASSWORD_PATTERN",
            ValidationError::RequiredField { .. } => "REQUIRED_FIELD",
            ValidationError::InvalidEmail => "INVALID_EMAIL",
        }
    }
}
