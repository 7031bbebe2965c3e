//! Value objects produced by domain services.

pub mod issued_credentials;

pub use issued_credentials::IssuedCredentials;
