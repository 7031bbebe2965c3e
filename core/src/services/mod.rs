//! Business services containing domain logic and use cases.

pub mod credential;
pub mod password;
pub mod registration;
pub mod token;

// Re-export commonly used types
pub use credential::{CredentialService, IdentityCheck};
pub use password::{CredentialHasher, HashingParams, PasswordPolicy, SecretHasher};
pub use registration::RegistrationService;
pub use token::{TokenIssuer, TokenIssuerConfig};
