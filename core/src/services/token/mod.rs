//! Token service module for JWT management
//!
//! This module handles token-related operations:
//! - HS256 access token issuance with an expiry policy
//! - Token verification distinguishing signature, expiry and format failures

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenIssuerConfig;
pub use service::TokenIssuer;
