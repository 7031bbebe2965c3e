use std::sync::Arc;

use actix_web::{web, HttpResponse};
use validator::Validate;

use cr_core::repositories::UserRepository;
use cr_core::services::registration::{mask_email, RegistrationService};

use crate::dto::{RegisterUserRequest, RegisterUserResponse};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

/// Application state that holds shared services
pub struct AppState<U>
where
    U: UserRepository,
{
    pub registration_service: Arc<RegistrationService<U>>,
}

impl<U: UserRepository> AppState<U> {
    pub fn new(registration_service: Arc<RegistrationService<U>>) -> Self {
        Self {
            registration_service,
        }
    }
}

/// Handler for POST /api/v1/users
///
/// Registers a user and returns it with its access token.
///
/// # Request Body
///
/// ```json
/// {
///     "name": "Juan Rodriguez",
///     "email": "juan@rodriguez.org",
///     "password": "Hunter22",
///     "phones": [{ "number": "1234567", "cityCode": "1", "countryCode": "57" }]
/// }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// {
///     "id": "550e8400-e29b-41d4-a716-446655440000",
///     "name": "Juan Rodriguez",
///     "email": "juan@rodriguez.org",
///     "phones": [{ "number": "1234567", "cityCode": "1", "countryCode": "57" }],
///     "created": "2025-08-14T10:00:00Z",
///     "modified": "2025-08-14T10:00:00Z",
///     "lastLogin": "2025-08-14T10:00:00Z",
///     "token": "eyJhbGciOiJIUzI1NiJ9...",
///     "isActive": true
/// }
/// ```
///
/// ## Errors
/// - 400: request validation or password policy failure
/// - 409: email already registered
/// - 500: unexpected failure, generic message
pub async fn register_user<U>(
    state: web::Data<AppState<U>>,
    request: web::Json<RegisterUserRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
{
    let request = request.into_inner();

    if let Err(validation_errors) = request.validate() {
        let fields: Vec<String> = validation_errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        tracing::warn!(
            email = %mask_email(&request.email),
            fields = ?fields,
            "Registration request failed validation"
        );
        return handle_validation_errors(&validation_errors);
    }

    match state.registration_service.register(request.into()).await {
        Ok(user) => HttpResponse::Created().json(RegisterUserResponse::from(user)),
        Err(error) => handle_domain_error(error),
    }
}
