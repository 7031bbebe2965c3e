//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::TokenError;

/// Default token lifetime (1 hour)
pub const DEFAULT_TOKEN_LIFETIME_SECONDS: i64 = 3600;

/// JWT issuer
pub const JWT_ISSUER: &str = "client-register";

/// JWT audience
pub const JWT_AUDIENCE: &str = "client-register-api";

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (the identity the token asserts)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates claims for `subject`, valid from `issued_at` for `lifetime`
    ///
    /// Fails with `InvalidLifetime` when the expiry falls outside the
    /// representable time range.
    pub fn new(
        subject: impl Into<String>,
        issued_at: DateTime<Utc>,
        lifetime: Duration,
        issuer: impl Into<String>,
        audience: impl Into<String>,
    ) -> Result<Self, TokenError> {
        let expiry = issued_at
            .checked_add_signed(lifetime)
            .ok_or(TokenError::InvalidLifetime {
                seconds: lifetime.num_seconds(),
            })?;

        Ok(Self {
            sub: subject.into(),
            iat: issued_at.timestamp(),
            exp: expiry.timestamp(),
            nbf: issued_at.timestamp(),
            iss: issuer.into(),
            aud: audience.into(),
            jti: Uuid::new_v4().to_string(),
        })
    }
}

/// A signed, time-stamped assertion of identity. Immutable once issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The identity the token asserts
    pub subject: String,

    /// When the token was issued
    pub issued_at: DateTime<Utc>,

    /// When the token stops being valid
    pub expires_at: DateTime<Utc>,

    /// The encoded JWT
    pub payload: String,
}
