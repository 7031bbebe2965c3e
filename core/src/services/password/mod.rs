//! Password module
//!
//! - Format validation against the configured password rule
//! - Argon2id hashing and verification of stored secrets

mod hasher;
mod policy;

#[cfg(test)]
mod tests;

pub use hasher::{CredentialHasher, HashingParams, SecretHasher};
pub use policy::{validate, PasswordPolicy};
