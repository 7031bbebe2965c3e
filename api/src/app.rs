//! Application factory
//!
//! Builds the Actix-web application around shared state created once at startup.

use actix_web::{error, error::JsonPayloadError, web, App, HttpResponse};
use serde_json::error::Category;
use tracing_actix_web::TracingLogger;

use cr_core::repositories::UserRepository;
use cr_shared::types::ErrorResponse;

use crate::routes::users::{register_user, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<U>(
    app_state: web::Data<AppState<U>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
{
    App::new()
        // Add application state
        .app_data(app_state)
        .app_data(json_config())
        .wrap(TracingLogger::default())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1").route("/users", web::post().to(register_user::<U>)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Malformed JSON bodies get the same error shape as every other failure
///
/// The parser's own message may quote the rejected value, which can be a
/// password, so only its category and position reach the client and the logs.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let mut body = ErrorResponse::new(
            "INVALID_REQUEST_BODY",
            "Request body is not valid JSON for this endpoint",
        )
        .add_detail("reason", payload_error_reason(&err));

        if let JsonPayloadError::Deserialize(e) = &err {
            body = body.add_detail("line", e.line()).add_detail("column", e.column());
        }
        tracing::warn!(reason = payload_error_reason(&err), "Rejected request body");

        let response = HttpResponse::BadRequest().json(body);
        error::InternalError::from_response("invalid request body", response).into()
    })
}

fn payload_error_reason(err: &JsonPayloadError) -> &'static str {
    match err {
        JsonPayloadError::ContentType => "unsupported_content_type",
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            "payload_too_large"
        }
        JsonPayloadError::Deserialize(e) => match e.classify() {
            Category::Syntax | Category::Eof => "malformed_json",
            Category::Data => "unexpected_field_type",
            Category::Io => "unreadable_payload",
        },
        _ => "unreadable_payload",
    }
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "client-register-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "NOT_FOUND",
        "The requested resource was not found",
    ))
}
