//! Output of the credential pipeline.

use crate::domain::entities::{StoredSecret, Token};

/// The storable secret and the token produced for a newly accepted credential
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedCredentials {
    /// Hashed password, ready to persist
    pub secret: StoredSecret,

    /// Token asserting the credential's identity
    pub token: Token,
}

impl IssuedCredentials {
    pub fn new(secret: StoredSecret, token: Token) -> Self {
        Self { secret, token }
    }
}
