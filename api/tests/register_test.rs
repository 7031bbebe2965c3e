//! Integration tests for the user registration endpoint

use std::sync::Arc;

use actix_web::{http::StatusCode, test, web};
use serde_json::{json, Value};

use cr_api::app::create_app;
use cr_api::routes::users::AppState;
use cr_core::repositories::{InMemoryUserRepository, UserRepository};
use cr_core::services::credential::CredentialService;
use cr_core::services::password::{CredentialHasher, HashingParams, PasswordPolicy};
use cr_core::services::registration::RegistrationService;
use cr_core::services::token::{TokenIssuer, TokenIssuerConfig};

const SECRET: &str = "integration-test-secret";

fn test_state() -> (web::Data<AppState<InMemoryUserRepository>>, Arc<InMemoryUserRepository>) {
    let hasher = CredentialHasher::new(HashingParams {
        memory_kib: 1024,
        iterations: 1,
        parallelism: 1,
    })
    .unwrap();
    let credentials = CredentialService::new(
        PasswordPolicy::new(r"^(?=.*[A-Z])(?=.*\d).{8,}$").unwrap(),
        hasher,
        TokenIssuer::new(TokenIssuerConfig::new(SECRET)).unwrap(),
    );

    let repo = Arc::new(InMemoryUserRepository::new());
    let service = RegistrationService::new(repo.clone(), Arc::new(credentials));
    (web::Data::new(AppState::new(Arc::new(service))), repo)
}

fn registration_body(email: &str, password: &str) -> Value {
    json!({
        "name": "Juan Rodriguez",
        "email": email,
        "password": password,
        "phones": [{ "number": "1234567", "cityCode": "1", "countryCode": "57" }]
    })
}

#[actix_web::test]
async fn test_register_returns_created_user() {
    let (state, repo) = test_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/users")
        .set_json(registration_body("juan@rodriguez.org", "Hunter22"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "Juan Rodriguez");
    assert_eq!(body["email"], "juan@rodriguez.org");
    assert_eq!(body["isActive"], true);
    assert_eq!(body["created"], body["modified"]);
    assert_eq!(body["created"], body["lastLogin"]);
    assert_eq!(body["phones"][0]["cityCode"], "1");
    assert!(body.get("password").is_none());

    let token = body["token"].as_str().unwrap();
    assert_eq!(token.split('.').count(), 3);
    let issuer = TokenIssuer::new(TokenIssuerConfig::new(SECRET)).unwrap();
    assert_eq!(issuer.verify(token).unwrap(), "juan@rodriguez.org");

    assert_eq!(repo.count().await.unwrap(), 1);
}

#[actix_web::test]
async fn test_register_duplicate_email_conflicts() {
    let (state, repo) = test_state();
    let app = test::init_service(create_app(state)).await;

    let first = test::TestRequest::post()
        .uri("/api/v1/users")
        .set_json(registration_body("juan@rodriguez.org", "Hunter22"))
        .to_request();
    assert_eq!(test::call_service(&app, first).await.status(), StatusCode::CREATED);

    let second = test::TestRequest::post()
        .uri("/api/v1/users")
        .set_json(registration_body("juan@rodriguez.org", "Another33"))
        .to_request();
    let resp = test::call_service(&app, second).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "USER_ALREADY_EXISTS");
    assert!(body.get("timestamp").is_some());
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[actix_web::test]
async fn test_register_rejects_weak_password() {
    let (state, repo) = test_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/users")
        .set_json(registration_body("juan@rodriguez.org", "hunter22"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "PASSWORD_POLICY_VIOLATION");
    assert!(!body.to_string().contains("hunter22"));
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[actix_web::test]
async fn test_register_rejects_invalid_email() {
    let (state, _) = test_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/users")
        .set_json(registration_body("not-an-email", "Hunter22"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["details"].get("email").is_some());
}

#[actix_web::test]
async fn test_register_rejects_malformed_body() {
    let (state, _) = test_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/users")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"name\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INVALID_REQUEST_BODY");
}

#[actix_web::test]
async fn test_body_errors_never_echo_field_values() {
    let (state, repo) = test_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/users")
        .set_json(json!({
            "name": "J",
            "email": "j@x.org",
            "password": 73915582461u64
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INVALID_REQUEST_BODY");
    assert_eq!(body["details"]["reason"], "unexpected_field_type");
    assert!(!body.to_string().contains("73915582461"));
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[actix_web::test]
async fn test_health_check() {
    let (state, _) = test_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_unknown_route_returns_not_found() {
    let (state, _) = test_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::get().uri("/api/v1/unknown").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
