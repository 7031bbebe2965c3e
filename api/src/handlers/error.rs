use actix_web::{http::StatusCode, HttpResponse};
use validator::ValidationErrors;

use cr_core::errors::{AuthError, DomainError, ValidationError};
use cr_shared::types::ErrorResponse;

/// HTTP status for a domain error
pub fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Auth(AuthError::UserAlreadyExists) => StatusCode::CONFLICT,
        DomainError::Auth(AuthError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
        DomainError::Token(err) if err.is_verification_failure() => StatusCode::UNAUTHORIZED,
        DomainError::Validation(ValidationError::InvalidPasswordPattern { .. }) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Handle domain errors and convert them to appropriate HTTP responses
///
/// Server-side failures get a generic message; their detail stays in the logs.
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    let status = status_for(&error);

    let body = if status.is_server_error() {
        tracing::error!(code = error.error_code(), error = %error, "Request failed");
        ErrorResponse::new("INTERNAL_ERROR", "An internal error occurred")
    } else {
        let response = ErrorResponse::new(error.error_code(), error.to_string());
        match &error {
            DomainError::Validation(ValidationError::RequiredField { field }) => {
                response.add_detail("field", field)
            }
            DomainError::Token(err) if err.requires_reauthentication() => {
                response.add_detail("reauthenticate", true)
            }
            _ => response,
        }
    };

    HttpResponse::build(status).json(body)
}

/// Convert `validator` failures into a 400 listing the offending fields
pub fn handle_validation_errors(errors: &ValidationErrors) -> HttpResponse {
    let mut response = ErrorResponse::new("VALIDATION_ERROR", "Invalid request data");

    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        response = response.add_detail(field.to_string(), messages);
    }

    HttpResponse::BadRequest().json(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cr_core::errors::TokenError;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&AuthError::UserAlreadyExists.into()),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_for(&ValidationError::PasswordPolicyViolation.into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&ValidationError::InvalidEmail.into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&TokenError::TokenExpired.into()),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_for(&TokenError::InvalidSignature.into()),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_for(&TokenError::TokenGenerationFailed.into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_for(&DomainError::Internal {
                message: "boom".to_string()
            }),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_errors_use_generic_body() {
        let response = handle_domain_error(DomainError::Repository {
            message: "connection refused at 10.0.0.5".to_string(),
        });
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
