//! Credential pipeline
//!
//! Runs the password rule, the hasher and the token issuer in that order,
//! stopping at the first failure.

mod service;

#[cfg(test)]
pub(crate) mod tests;

pub use service::{CredentialService, IdentityCheck};
