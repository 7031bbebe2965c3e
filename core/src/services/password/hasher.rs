//! Password hashing and verification using Argon2id

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use cr_shared::config::PasswordConfig;

use crate::domain::entities::StoredSecret;
use crate::errors::{AuthError, DomainError};

/// Converts plaintext passwords into stored secrets and checks attempts against them
pub trait SecretHasher: Send + Sync + 'static {
    /// Hash `plaintext` with a fresh random salt
    fn hash(&self, plaintext: &str) -> Result<StoredSecret, AuthError>;

    /// True iff `plaintext` matches `stored`; malformed secrets never match
    fn verify(&self, plaintext: &str, stored: &StoredSecret) -> bool;
}

/// Argon2 cost parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashingParams {
    /// Memory cost in KiB
    pub memory_kib: u32,
    /// Number of passes
    pub iterations: u32,
    /// Degree of parallelism
    pub parallelism: u32,
}

impl Default for HashingParams {
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

impl From<&PasswordConfig> for HashingParams {
    fn from(config: &PasswordConfig) -> Self {
        Self {
            memory_kib: config.memory_kib,
            iterations: config.iterations,
            parallelism: config.parallelism,
        }
    }
}

/// Argon2id credential hasher
///
/// ## Security
///
/// - Algorithm: Argon2id, version 0x13
/// - Salt: random 16-byte salt generated per hash
/// - Output: PHC string embedding algorithm, version, cost and salt, so
///   secrets created with older cost parameters still verify
#[derive(Clone)]
pub struct CredentialHasher {
    argon2: Argon2<'static>,
    params: HashingParams,
}

impl std::fmt::Debug for CredentialHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialHasher")
            .field("params", &self.params)
            .finish()
    }
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self {
            argon2: Argon2::default(),
            params: HashingParams::default(),
        }
    }
}

impl CredentialHasher {
    /// Creates a hasher with the given cost parameters
    ///
    /// # Returns
    ///
    /// * `Ok(CredentialHasher)` - Hasher ready for use
    /// * `Err(DomainError::Internal)` - Parameters rejected by Argon2
    pub fn new(params: HashingParams) -> Result<Self, DomainError> {
        let argon2_params = Params::new(params.memory_kib, params.iterations, params.parallelism, None)
            .map_err(|e| DomainError::Internal {
                message: format!("Invalid password hashing parameters: {}", e),
            })?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, argon2_params),
            params,
        })
    }

    /// Creates a hasher from configuration
    pub fn from_config(config: &PasswordConfig) -> Result<Self, DomainError> {
        Self::new(HashingParams::from(config))
    }

    /// Cost parameters used for new hashes
    pub fn params(&self) -> HashingParams {
        self.params
    }

    /// Hash a password
    ///
    /// The encoded output differs on every call because the salt does;
    /// every output verifies against the same plaintext.
    pub fn hash(&self, plaintext: &str) -> Result<StoredSecret, AuthError> {
        let salt = SaltString::generate(&mut OsRng);

        let password_hash = self
            .argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| {
                tracing::error!(error = %e, "Password hashing failed");
                AuthError::CredentialHashingFailed
            })?
            .to_string();

        Ok(StoredSecret::new(password_hash))
    }

    /// Verify a password against a stored secret
    ///
    /// Uses the parameters embedded in `stored`. A secret that does not parse
    /// as a PHC string, or names an unsupported algorithm, yields `false`.
    pub fn verify(&self, plaintext: &str, stored: &StoredSecret) -> bool {
        let parsed_hash = match PasswordHash::new(stored.as_str()) {
            Ok(hash) => hash,
            Err(e) => {
                tracing::warn!(error = %e, "Stored secret is malformed");
                return false;
            }
        };

        match self.argon2.verify_password(plaintext.as_bytes(), &parsed_hash) {
            Ok(()) => true,
            Err(argon2::password_hash::Error::Password) => false,
            Err(e) => {
                tracing::warn!(error = %e, "Stored secret could not be verified");
                false
            }
        }
    }
}

impl SecretHasher for CredentialHasher {
    fn hash(&self, plaintext: &str) -> Result<StoredSecret, AuthError> {
        CredentialHasher::hash(self, plaintext)
    }

    fn verify(&self, plaintext: &str, stored: &StoredSecret) -> bool {
        CredentialHasher::verify(self, plaintext, stored)
    }
}
