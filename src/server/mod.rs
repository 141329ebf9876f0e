pub mod assets;
pub mod handlers;
mod types;

pub use handlers::AppState;
pub use types::SERVICE_NAME;

use crate::{Result, config::Config, llm::DatabricksClient};
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::{info, warn};

/// Builds the application router around `state`.
pub fn router(state: AppState) -> Router {
    let mut app = Router::new()
        .route("/", get(handlers::index))
        .route("/api/generate-excuse", post(handlers::generate_excuse))
        .route("/health", get(handlers::health))
        .route("/healthz", get(handlers::healthz))
        .route("/ready", get(handlers::ready))
        .route("/ping", get(handlers::ping))
        .route("/metrics", get(handlers::metrics))
        .route("/debug", get(handlers::debug_info));

    if let Some(public_dir) = &state.public_dir {
        app = app.nest_service("/static", ServeDir::new(public_dir));
    }

    app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    )
    .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let inference = DatabricksClient::new(&config.llm)?;
    let public_dir = assets::resolve_public_dir(config.server.public_dir.as_deref());

    info!("Inference endpoint configured: {}", !config.llm.endpoint_url.is_empty());
    info!("Inference token configured: {}", config.llm.has_token());
    if !config.llm.has_token() {
        warn!("DATABRICKS_API_TOKEN is not set, excuse generation will fail");
    }

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    let app_state = AppState {
        config: Arc::new(config),
        inference: Arc::new(inference),
        public_dir,
    };
    let app = router(app_state);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
