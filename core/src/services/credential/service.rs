//! Credential service implementation

use cr_shared::config::AuthConfig;

use crate::domain::entities::{Credential, StoredSecret, Token};
use crate::domain::value_objects::IssuedCredentials;
use crate::errors::{AuthError, DomainResult, ValidationError};
use crate::services::password::{CredentialHasher, PasswordPolicy, SecretHasher};
use crate::services::token::{TokenIssuer, TokenIssuerConfig};

/// Result of the caller's identity uniqueness pre-check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityCheck {
    /// No principal uses the identity yet
    Available,
    /// The identity is already registered
    Taken,
}

impl IdentityCheck {
    pub fn from_exists(exists: bool) -> Self {
        if exists {
            IdentityCheck::Taken
        } else {
            IdentityCheck::Available
        }
    }
}

/// Credential policy and token issuance.
///
/// Built once at startup; every component is read-only afterwards, so a
/// single instance serves any number of concurrent callers.
#[derive(Debug)]
pub struct CredentialService<H: SecretHasher = CredentialHasher> {
    policy: PasswordPolicy,
    hasher: H,
    issuer: TokenIssuer,
}

impl CredentialService<CredentialHasher> {
    /// Builds the pipeline from configuration
    ///
    /// Any error here means the service must not start: the password rule
    /// does not compile, the hashing parameters are rejected, or the signing
    /// key is missing.
    pub fn from_config(config: &AuthConfig) -> DomainResult<Self> {
        let policy = PasswordPolicy::from_config(&config.password)?;
        let hasher = CredentialHasher::from_config(&config.password)?;
        let issuer = TokenIssuer::new(TokenIssuerConfig::from(&config.jwt))?;

        Ok(Self::new(policy, hasher, issuer))
    }
}

impl<H: SecretHasher> CredentialService<H> {
    /// Creates a credential service from its components
    pub fn new(policy: PasswordPolicy, hasher: H, issuer: TokenIssuer) -> Self {
        Self {
            policy,
            hasher,
            issuer,
        }
    }

    /// Password rule in force
    pub fn policy(&self) -> &PasswordPolicy {
        &self.policy
    }

    /// Token issuer in use
    pub fn issuer(&self) -> &TokenIssuer {
        &self.issuer
    }

    /// Accepts a new credential
    ///
    /// Steps, each short-circuiting on failure:
    /// 1. Identity pre-check (`UserAlreadyExists`); nothing is hashed for a taken identity
    /// 2. Password rule (`PasswordPolicyViolation`)
    /// 3. Hashing
    /// 4. Token issuance for the credential's identity
    pub fn issue(
        &self,
        credential: &Credential,
        identity: IdentityCheck,
    ) -> DomainResult<IssuedCredentials> {
        if identity == IdentityCheck::Taken {
            return Err(AuthError::UserAlreadyExists.into());
        }

        if !self.policy.validate(credential.plaintext_password()) {
            return Err(ValidationError::PasswordPolicyViolation.into());
        }

        let secret = self.hasher.hash(credential.plaintext_password())?;
        let token = self.issuer.issue(credential.identity())?;

        Ok(IssuedCredentials::new(secret, token))
    }

    /// Checks a login attempt against the stored secret and issues a fresh token
    pub fn authenticate(&self, credential: &Credential, stored: &StoredSecret) -> DomainResult<Token> {
        if !self.hasher.verify(credential.plaintext_password(), stored) {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(self.issuer.issue(credential.identity())?)
    }

    /// Resolves a token payload to the identity it asserts
    pub fn verify_token(&self, payload: &str) -> DomainResult<String> {
        Ok(self.issuer.verify(payload)?)
    }
}
