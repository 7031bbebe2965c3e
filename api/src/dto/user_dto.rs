use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use cr_core::domain::entities::{NewUser, Phone, User};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneDto {
    pub number: String,
    pub city_code: String,
    pub country_code: String,
}

impl From<PhoneDto> for Phone {
    fn from(dto: PhoneDto) -> Self {
        Phone::new(dto.number, dto.city_code, dto.country_code)
    }
}

impl From<Phone> for PhoneDto {
    fn from(phone: Phone) -> Self {
        Self {
            number: phone.number,
            city_code: phone.city_code,
            country_code: phone.country_code,
        }
    }
}

/// Body of `POST /api/v1/users`
///
/// The password format is checked by the credential policy, not here, so the
/// configured rule stays the only password rule.
#[derive(Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Email format is invalid"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    #[serde(default)]
    pub phones: Vec<PhoneDto>,
}

impl std::fmt::Debug for RegisterUserRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterUserRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("phones", &self.phones)
            .finish()
    }
}

impl From<RegisterUserRequest> for NewUser {
    fn from(dto: RegisterUserRequest) -> Self {
        NewUser {
            name: dto.name,
            email: dto.email,
            password: dto.password,
            phones: dto.phones.into_iter().map(Phone::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phones: Vec<PhoneDto>,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    pub last_login: DateTime<Utc>,
    pub token: String,
    pub is_active: bool,
}

impl From<User> for RegisterUserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phones: user.phones.into_iter().map(PhoneDto::from).collect(),
            created: user.created,
            modified: user.modified,
            last_login: user.last_login,
            token: user.token,
            is_active: user.is_active,
        }
    }
}
