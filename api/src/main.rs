use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use dotenvy::dotenv;

use cr_api::app::create_app;
use cr_api::logging::init_tracing;
use cr_api::routes::users::AppState;
use cr_core::repositories::InMemoryUserRepository;
use cr_core::services::credential::CredentialService;
use cr_core::services::registration::RegistrationService;
use cr_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Load configuration
    // Validation happens inside `load`
    let config = AppConfig::load().context("failed to load configuration")?;

    init_tracing(&config.logging)?;

    tracing::info!(environment = %config.environment, "Starting client register API");

    if config.auth.jwt.is_using_default_secret() {
        tracing::warn!("Using the built-in development signing key");
    }

    // The credential pipeline is built once; a bad password rule or a
    // missing signing key stops the process here
    let credentials = CredentialService::from_config(&config.auth)
        .context("failed to build credential pipeline")?;

    let user_repository = Arc::new(InMemoryUserRepository::new());
    let registration_service = Arc::new(RegistrationService::new(
        user_repository,
        Arc::new(credentials),
    ));
    let app_state = web::Data::new(AppState::new(registration_service));

    let bind_address = config.server.bind_address();
    tracing::info!(address = %bind_address, "Server will bind");

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await
        .context("server terminated with an error")
}
