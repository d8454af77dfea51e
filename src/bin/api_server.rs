// src/bin/api_server.rs

use nz_walks_api::infra::config::AppConfig;
use nz_walks_api::infra::logging;
use nz_walks_api::transport;
use nz_walks_api::{DatabaseService, Stores};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let config = AppConfig::from_env()?;
    tracing::info!(
        backend = ?config.backend,
        field_validation = ?config.policies.field_validation,
        reference_delete = ?config.policies.reference_delete,
        "configuration loaded"
    );

    // --- Store Initialization ---
    // `database` is only present for the Postgres backend.
    let stores = match &config.database {
        Some(database) => {
            tracing::info!(max_connections = database.max_connections, "connecting to Postgres");
            DatabaseService::connect(database).await?.stores()
        }
        None => {
            tracing::warn!("using the in-memory store; data is lost on exit");
            Stores::in_memory()
        }
    };

    let app_state = transport::http::AppState::new(stores, config.policies);

    // --- API Server Initialization ---
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(cors);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "API server listening; Swagger UI at /swagger-ui");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for Ctrl+C");
            }
            tracing::info!("shutdown signal received");
        })
        .await?;

    tracing::info!("graceful shutdown complete");
    Ok(())
}
