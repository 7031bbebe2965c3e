//! Credentials presented by a caller and the secrets derived from them.

use serde::{Deserialize, Serialize};

/// An identity together with the plaintext password presented for it.
///
/// Exists only for the duration of a registration or login attempt and is
/// never serialized. `Debug` output omits the password.
#[derive(Clone)]
pub struct Credential {
    identity: String,
    plaintext_password: String,
}

impl Credential {
    /// Creates a credential for `identity` (e.g. an email address)
    pub fn new(identity: impl Into<String>, plaintext_password: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            plaintext_password: plaintext_password.into(),
        }
    }

    /// The unique key naming the principal
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// The presented password
    pub fn plaintext_password(&self) -> &str {
        &self.plaintext_password
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("identity", &self.identity)
            .field("plaintext_password", &"<redacted>")
            .finish()
    }
}

/// One-way, verifiable representation of a password (a PHC string).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoredSecret {
    hashed_value: String,
}

impl StoredSecret {
    /// Wraps an already-encoded hash, e.g. one loaded from storage
    pub fn new(hashed_value: impl Into<String>) -> Self {
        Self {
            hashed_value: hashed_value.into(),
        }
    }

    /// The encoded hash
    pub fn as_str(&self) -> &str {
        &self.hashed_value
    }
}
