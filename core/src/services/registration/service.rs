//! Registration service implementation

use std::sync::Arc;

use crate::domain::entities::{Credential, NewUser, User};
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::credential::{CredentialService, IdentityCheck};
use crate::services::password::{CredentialHasher, SecretHasher};

use super::email_utils::{is_valid_email, mask_email};

/// Registers new users
pub struct RegistrationService<U, H = CredentialHasher>
where
    U: UserRepository,
    H: SecretHasher,
{
    /// User repository for persistence
    user_repository: Arc<U>,
    /// Credential pipeline
    credentials: Arc<CredentialService<H>>,
}

impl<U, H> RegistrationService<U, H>
where
    U: UserRepository,
    H: SecretHasher,
{
    /// Create a new registration service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user persistence
    /// * `credentials` - Credential pipeline built at startup
    pub fn new(user_repository: Arc<U>, credentials: Arc<CredentialService<H>>) -> Self {
        Self {
            user_repository,
            credentials,
        }
    }

    /// Credential pipeline in use
    pub fn credentials(&self) -> &CredentialService<H> {
        &self.credentials
    }

    /// Register a new user
    ///
    /// This method:
    /// 1. Checks required fields and the email format
    /// 2. Checks that the email is not registered yet
    /// 3. Validates and hashes the password, then issues a token for the email
    /// 4. Persists the user with the token attached
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The stored user
    /// * `Err(DomainError)` - Client-correctable failures are returned as-is;
    ///   anything else is reported as a generic internal error
    pub async fn register(&self, request: NewUser) -> DomainResult<User> {
        let masked_email = mask_email(&request.email);
        tracing::info!(email = %masked_email, "Registering user");

        match self.try_register(request).await {
            Ok(user) => {
                tracing::info!(user_id = %user.id, email = %masked_email, "User registered");
                Ok(user)
            }
            Err(err) if err.is_client_error() => {
                tracing::warn!(
                    email = %masked_email,
                    outcome = err.error_code(),
                    "Registration rejected"
                );
                Err(err)
            }
            Err(err) => {
                tracing::error!(
                    email = %masked_email,
                    outcome = err.error_code(),
                    error = %err,
                    "Unexpected registration failure"
                );
                Err(DomainError::Internal {
                    message: "Internal error while registering user".to_string(),
                })
            }
        }
    }

    async fn try_register(&self, request: NewUser) -> DomainResult<User> {
        let NewUser {
            name,
            email,
            password,
            phones,
        } = request;

        if name.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: "name".to_string(),
            }
            .into());
        }
        if email.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: "email".to_string(),
            }
            .into());
        }
        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail.into());
        }

        let exists = self.user_repository.exists_by_email(&email).await?;
        let identity = IdentityCheck::from_exists(exists);
        let credential = Credential::new(email.clone(), password);

        // Hashing is CPU-bound; keep it off the async workers
        let credentials = Arc::clone(&self.credentials);
        let issued = tokio::task::spawn_blocking(move || credentials.issue(&credential, identity))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Credential task failed: {}", e),
            })??;

        let user = User::new(name, email, issued.secret, issued.token.payload, phones);
        self.user_repository.create(user).await
    }
}
