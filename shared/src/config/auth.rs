//! Authentication configuration: token signing and password policy

use serde::{Deserialize, Serialize};

/// Secret used when nothing else is configured; refused in production
const DEFAULT_JWT_SECRET: &str = "development-secret-please-change-in-production";

/// Default password rule: at least 8 characters with one uppercase letter and one digit
pub const DEFAULT_PASSWORD_REGEX: &str = r"^(?=.*[A-Z])(?=.*\d).{8,}$";

/// Longest accepted access token lifetime (one year)
pub const MAX_ACCESS_TOKEN_EXPIRY_SECONDS: i64 = 365 * 24 * 60 * 60;

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// HMAC secret used to sign tokens
    pub secret: String,

    /// Access token lifetime in seconds
    pub access_token_expiry: i64,

    /// JWT issuer claim
    pub issuer: String,

    /// JWT audience claim
    pub audience: String,

    /// Clock skew tolerated when checking `exp` and `nbf`, in seconds
    #[serde(default)]
    pub leeway: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_JWT_SECRET),
            access_token_expiry: 3600, // 1 hour
            issuer: String::from("client-register"),
            audience: String::from("client-register-api"),
            leeway: 0,
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry = minutes * 60;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_JWT_SECRET
    }
}

/// Password policy and hashing cost configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PasswordConfig {
    /// Format rule a password must fully match
    pub regex: String,

    /// Argon2 memory cost in KiB
    #[serde(default = "default_memory_kib")]
    pub memory_kib: u32,

    /// Argon2 time cost (passes)
    #[serde(default = "default_iterations")]
    pub iterations: u32,

    /// Argon2 lanes
    #[serde(default = "default_parallelism")]
    pub parallelism: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            regex: String::from(DEFAULT_PASSWORD_REGEX),
            memory_kib: default_memory_kib(),
            iterations: default_iterations(),
            parallelism: default_parallelism(),
        }
    }
}

impl PasswordConfig {
    /// Create a password configuration with a custom format rule
    pub fn with_regex(regex: impl Into<String>) -> Self {
        Self {
            regex: regex.into(),
            ..Default::default()
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    #[serde(default)]
    pub jwt: JwtConfig,

    /// Password policy configuration
    #[serde(default)]
    pub password: PasswordConfig,
}

// Argon2id defaults (19 MiB, 2 passes, 1 lane)
fn default_memory_kib() -> u32 {
    19 * 1024
}

fn default_iterations() -> u32 {
    2
}

fn default_parallelism() -> u32 {
    1
}
