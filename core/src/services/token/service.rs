//! Token issuer implementation

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use cr_shared::config::MAX_ACCESS_TOKEN_EXPIRY_SECONDS;

use crate::domain::entities::token::{Claims, Token};
use crate::errors::TokenError;

use super::config::TokenIssuerConfig;

/// Issues and verifies HS256-signed tokens.
///
/// Key material is fixed at construction and never changes afterwards, so a
/// single issuer can be shared by reference between any number of callers.
pub struct TokenIssuer {
    config: TokenIssuerConfig,
    lifetime: Duration,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("config", &self.config)
            .finish()
    }
}

impl TokenIssuer {
    /// Creates a new token issuer
    ///
    /// # Arguments
    ///
    /// * `config` - Signing secret, lifetime and claim configuration
    ///
    /// # Returns
    ///
    /// * `Ok(TokenIssuer)` - Ready to issue tokens
    /// * `Err(TokenError::SigningKeyUnavailable)` - The secret is missing; fatal at startup
    /// * `Err(TokenError::InvalidLifetime)` - The lifetime is not positive or too long
    pub fn new(config: TokenIssuerConfig) -> Result<Self, TokenError> {
        if config.secret.trim().is_empty() {
            return Err(TokenError::SigningKeyUnavailable {
                message: "JWT secret is empty".to_string(),
            });
        }

        let invalid_lifetime = TokenError::InvalidLifetime {
            seconds: config.lifetime_seconds,
        };
        if config.lifetime_seconds <= 0 || config.lifetime_seconds > MAX_ACCESS_TOKEN_EXPIRY_SECONDS {
            return Err(invalid_lifetime);
        }
        let lifetime = Duration::try_seconds(config.lifetime_seconds)
            .filter(|lifetime| Utc::now().checked_add_signed(*lifetime).is_some())
            .ok_or(invalid_lifetime)?;

        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_audience(&[config.audience.as_str()]);
        validation.set_required_spec_claims(&["exp", "nbf", "sub", "iss", "aud"]);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = config.leeway_seconds;

        Ok(Self {
            config,
            lifetime,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// Token lifetime applied to newly issued tokens
    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// Issues a token asserting `subject`
    ///
    /// # Returns
    ///
    /// * `Ok(Token)` - Signed token expiring `lifetime` after now
    /// * `Err(TokenError::MissingClaim)` - `subject` is empty
    /// * `Err(TokenError::TokenGenerationFailed)` - Signing failed
    pub fn issue(&self, subject: &str) -> Result<Token, TokenError> {
        self.issue_at(subject, Utc::now())
    }

    /// Issues a token as if the current time were `issued_at`
    pub(crate) fn issue_at(&self, subject: &str, issued_at: DateTime<Utc>) -> Result<Token, TokenError> {
        if subject.trim().is_empty() {
            return Err(TokenError::MissingClaim {
                claim: "sub".to_string(),
            });
        }

        let expires_at = issued_at
            .checked_add_signed(self.lifetime)
            .ok_or(TokenError::InvalidLifetime {
                seconds: self.config.lifetime_seconds,
            })?;
        let claims = Claims::new(
            subject,
            issued_at,
            self.lifetime,
            self.config.issuer.as_str(),
            self.config.audience.as_str(),
        )?;
        let payload = self.encode_jwt(&claims)?;

        Ok(Token {
            subject: subject.to_string(),
            issued_at,
            expires_at,
            payload,
        })
    }

    /// Encodes claims into a JWT
    pub(crate) fn encode_jwt(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(Algorithm::HS256);
        encode(&header, claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "JWT encoding failed");
            TokenError::TokenGenerationFailed
        })
    }

    /// Verifies a token and returns the subject it asserts
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The subject, if the token is valid
    /// * `Err(TokenError::InvalidSignature)` - Not signed with this issuer's key, or any
    ///   segment of a three-segment token altered
    /// * `Err(TokenError::TokenExpired)` - Genuine but past its expiry
    /// * `Err(TokenError::TokenNotYetValid)` - Genuine but before its `nbf`
    /// * `Err(TokenError::InvalidClaims)` - Wrong issuer or audience, or a claim is missing
    /// * `Err(TokenError::InvalidTokenFormat)` - Not three dot-separated segments
    pub fn verify(&self, payload: &str) -> Result<String, TokenError> {
        self.verify_claims(payload).map(|claims| claims.sub)
    }

    /// Verifies a token and returns all of its claims
    pub fn verify_claims(&self, payload: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(payload, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| classify_error(e.kind(), payload))
    }
}

fn classify_error(kind: &ErrorKind, payload: &str) -> TokenError {
    let well_formed = payload.split('.').count() == 3;

    match kind {
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        // The header is decoded before the signature is checked, so an
        // altered header surfaces as a decoding or algorithm error
        ErrorKind::Base64(_)
        | ErrorKind::Json(_)
        | ErrorKind::Utf8(_)
        | ErrorKind::InvalidAlgorithm
            if well_formed =>
        {
            TokenError::InvalidSignature
        }
        ErrorKind::ExpiredSignature => TokenError::TokenExpired,
        ErrorKind::ImmatureSignature => TokenError::TokenNotYetValid,
        ErrorKind::InvalidIssuer
        | ErrorKind::InvalidAudience
        | ErrorKind::InvalidSubject
        | ErrorKind::MissingRequiredClaim(_) => TokenError::InvalidClaims,
        _ => TokenError::InvalidTokenFormat,
    }
}
