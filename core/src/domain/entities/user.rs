//! User entity representing a registered client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::credential::StoredSecret;

/// A phone number attached to a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    pub number: String,
    pub city_code: String,
    pub country_code: String,
}

impl Phone {
    pub fn new(
        number: impl Into<String>,
        city_code: impl Into<String>,
        country_code: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            city_code: city_code.into(),
            country_code: country_code.into(),
        }
    }
}

/// Registration request as seen by the domain
///
/// `Debug` omits the password.
#[derive(Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phones: Vec<Phone>,
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("phones", &self.phones)
            .finish()
    }
}

/// User entity representing a registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Email address, unique across users
    pub email: String,

    /// Hashed password
    pub password: StoredSecret,

    /// Registered phone numbers
    pub phones: Vec<Phone>,

    /// Timestamp when the user was created
    pub created: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub modified: DateTime<Utc>,

    /// Timestamp of the user's last login
    pub last_login: DateTime<Utc>,

    /// Token issued at registration or last login
    pub token: String,

    /// Whether the account is active
    pub is_active: bool,
}

impl User {
    /// Creates a new active user; all timestamps are set to now
    pub fn new(
        name: String,
        email: String,
        password: StoredSecret,
        token: String,
        phones: Vec<Phone>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password,
            phones,
            created: now,
            modified: now,
            last_login: now,
            token,
            is_active: true,
        }
    }
}
