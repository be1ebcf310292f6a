pub mod handlers;
pub mod types;

use crate::{
    Error, Result,
    config::{Config, CorsConfig},
    llm::{OpenRouterClient, Relay},
};
use axum::{Router, http::HeaderValue, routing::post};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

pub async fn run(config: Config) -> Result<()> {
    // Initialize relay
    let client = OpenRouterClient::new(&config.llm)?;
    let relay = Relay::new(Arc::new(client), &config.llm);
    info!("Relaying completions to model {}", relay.model());

    // Create router
    let app = router(AppState::new(relay), cors_layer(&config.server.cors)?);

    // Start server
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

pub fn router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/diagnose", post(handlers::diagnose))
        .route("/drug-info", post(handlers::drug_info))
        .route("/disease-info", post(handlers::disease_info))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Credentialed CORS for the configured origins. Methods and headers are
/// mirrored from the preflight since wildcards are not allowed with credentials.
pub fn cors_layer(config: &CorsConfig) -> Result<CorsLayer> {
    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            if origin == "*" {
                return Err(Error::config(
                    "Wildcard CORS origin cannot be combined with credentials",
                ));
            }
            origin
                .parse::<HeaderValue>()
                .map_err(|e| Error::config(format!("Invalid CORS origin '{}': {}", origin, e)))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
