//! Shared configuration and common types for the client registration server
//!
//! This crate provides functionality used across the server modules:
//! - Configuration types and the layered configuration loader
//! - Error response structure returned by the API

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, Environment, JwtConfig, LogFormat, LoggingConfig, PasswordConfig,
    ServerConfig,
};
pub use types::ErrorResponse;
