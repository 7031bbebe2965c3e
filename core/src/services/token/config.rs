//! Configuration for the token issuer

use cr_shared::config::JwtConfig;

use crate::domain::entities::token::{DEFAULT_TOKEN_LIFETIME_SECONDS, JWT_AUDIENCE, JWT_ISSUER};

/// Configuration for the token issuer
#[derive(Clone)]
pub struct TokenIssuerConfig {
    /// HMAC signing secret
    pub secret: String,
    /// Token lifetime in seconds
    pub lifetime_seconds: i64,
    /// Issuer claim written and required on verify
    pub issuer: String,
    /// Audience claim written and required on verify
    pub audience: String,
    /// Clock skew tolerated on `exp` / `nbf`, in seconds
    pub leeway_seconds: u64,
}

impl std::fmt::Debug for TokenIssuerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuerConfig")
            .field("secret", &"<redacted>")
            .field("lifetime_seconds", &self.lifetime_seconds)
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("leeway_seconds", &self.leeway_seconds)
            .finish()
    }
}

impl TokenIssuerConfig {
    /// Creates a configuration with the given secret and default claims
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            lifetime_seconds: DEFAULT_TOKEN_LIFETIME_SECONDS,
            issuer: JWT_ISSUER.to_string(),
            audience: JWT_AUDIENCE.to_string(),
            leeway_seconds: 0,
        }
    }

    /// Sets the token lifetime
    pub fn with_lifetime_seconds(mut self, seconds: i64) -> Self {
        self.lifetime_seconds = seconds;
        self
    }
}

impl From<&JwtConfig> for TokenIssuerConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            secret: config.secret.clone(),
            lifetime_seconds: config.access_token_expiry,
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            leeway_seconds: config.leeway.max(0) as u64,
        }
    }
}
