//! Domain entities representing core business objects.

pub mod credential;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use credential::{Credential, StoredSecret};
pub use token::{Claims, Token, DEFAULT_TOKEN_LIFETIME_SECONDS, JWT_AUDIENCE, JWT_ISSUER};
pub use user::{NewUser, Phone, User};
