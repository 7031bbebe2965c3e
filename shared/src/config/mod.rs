//! Configuration module with business-specific sub-modules
//!
//! - `auth` - JWT signing and password policy configuration
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server configuration
//!
//! Configuration is assembled once at startup from, in increasing priority:
//! built-in defaults for the detected environment, an optional `config.toml`,
//! an optional `config.<environment>.toml`, and `CLIENT_REGISTER__*`
//! environment variables. It is never reloaded while the process runs.

pub mod auth;
pub mod environment;
pub mod server;

use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};

pub use auth::{AuthConfig, JwtConfig, PasswordConfig, MAX_ACCESS_TOKEN_EXPIRY_SECONDS};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::ServerConfig;

/// Prefix for configuration environment variables
pub const ENV_PREFIX: &str = "CLIENT_REGISTER";

/// Separator between the prefix and nested keys, e.g. `CLIENT_REGISTER__AUTH__JWT__SECRET`
pub const ENV_SEPARATOR: &str = "__";

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl AppConfig {
    /// Built-in defaults for the given environment
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            server: ServerConfig::default(),
            auth: AuthConfig::default(),
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Load configuration for the environment named by `ENVIRONMENT`
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_prefix(Environment::from_env(), ENV_PREFIX)
    }

    /// Load configuration reading environment overrides under `prefix`
    pub fn load_with_prefix(environment: Environment, prefix: &str) -> Result<Self, ConfigError> {
        let defaults = Self::for_environment(environment);

        let settings = Config::builder()
            .add_source(Config::try_from(&defaults)?)
            .add_source(File::with_name("config").required(false))
            .add_source(File::with_name(environment.config_name()).required(false))
            .add_source(
                config::Environment::with_prefix(prefix)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the service must not start with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("server.port cannot be 0".into()));
        }

        let jwt = &self.auth.jwt;
        if jwt.secret.trim().is_empty() {
            return Err(ConfigError::Message("auth.jwt.secret cannot be empty".into()));
        }
        if jwt.access_token_expiry <= 0 {
            return Err(ConfigError::Message(
                "auth.jwt.access_token_expiry must be greater than 0".into(),
            ));
        }
        if jwt.access_token_expiry > MAX_ACCESS_TOKEN_EXPIRY_SECONDS {
            return Err(ConfigError::Message(format!(
                "auth.jwt.access_token_expiry cannot exceed {} seconds",
                MAX_ACCESS_TOKEN_EXPIRY_SECONDS
            )));
        }
        if jwt.leeway < 0 {
            return Err(ConfigError::Message("auth.jwt.leeway cannot be negative".into()));
        }
        if self.environment.is_production() && jwt.is_using_default_secret() {
            return Err(ConfigError::Message(
                "auth.jwt.secret must be set explicitly in production".into(),
            ));
        }

        let password = &self.auth.password;
        if password.memory_kib == 0 || password.iterations == 0 || password.parallelism == 0 {
            return Err(ConfigError::Message(
                "auth.password hashing cost parameters must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}
