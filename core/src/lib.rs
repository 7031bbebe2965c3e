//! # Client Register Core
//!
//! Domain layer for the client registration backend.
//! This crate holds the domain entities, the credential pipeline (password policy,
//! secret hashing and token issuance), the user repository interface and the
//! error types the API layer maps to responses.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    Claims, Credential, IssuedCredentials, NewUser, Phone, StoredSecret, Token, User,
};
pub use errors::{AuthError, DomainError, DomainResult, TokenError, ValidationError};
pub use repositories::{InMemoryUserRepository, UserRepository};
pub use services::{
    CredentialHasher, CredentialService, IdentityCheck, PasswordPolicy, RegistrationService,
    SecretHasher, TokenIssuer,
};
