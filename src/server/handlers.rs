use super::{assets, types::*};
use crate::{
    Result,
    config::Config,
    excuse::{ExcuseRequest, ExcuseResponse, build_prompt},
    llm::{InferenceClient, extract_excuse},
};
use axum::{
    extract::{State, rejection::JsonRejection},
    response::{Html, IntoResponse, Json, Response},
};
use std::{io::ErrorKind, path::PathBuf, sync::Arc};
use tracing::{error, info, warn};
use validator::Validate;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub inference: Arc<dyn InferenceClient>,
    pub public_dir: Option<PathBuf>,
}

pub async fn generate_excuse(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ExcuseRequest>, JsonRejection>,
) -> Result<Json<ExcuseResponse>> {
    let Json(request) =
        payload.inspect_err(|e| warn!("Rejected excuse request body: {}", e.body_text()))?;

    info!(
        category = %request.category,
        tone = %request.tone,
        seriousness = request.seriousness,
        "Generating excuse"
    );

    request.validate().inspect_err(|e| warn!("Rejected excuse request: {}", e))?;

    let prompt = build_prompt(&request);
    let text = state
        .inference
        .complete(&prompt)
        .await
        .inspect_err(|e| error!("Error generating excuse: {}", e))?;

    let email = extract_excuse(&text);
    info!("Generated excuse with subject: {}", email.subject);

    Ok(Json(ExcuseResponse::from(email)))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: chrono::Utc::now().to_rfc3339(),
        service: SERVICE_NAME,
    })
}

pub async fn healthz() -> Json<StatusResponse> {
    Json(StatusResponse { status: "ok" })
}

pub async fn ready() -> Json<StatusResponse> {
    Json(StatusResponse { status: "ready" })
}

pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse { message: "pong" })
}

pub async fn metrics(State(state): State<AppState>) -> Json<MetricsResponse> {
    let config = &state.config;
    Json(MetricsResponse {
        app_info: AppInfo {
            name: SERVICE_NAME,
            version: env!("CARGO_PKG_VERSION"),
            status: "running",
        },
        environment: MetricsEnvironment {
            port: config.server.port,
            host: config.server.host.clone(),
            has_token: config.llm.has_token(),
            endpoint_configured: !config.llm.endpoint_url.is_empty(),
        },
    })
}

pub async fn debug_info(State(state): State<AppState>) -> Json<DebugResponse> {
    let config = &state.config;
    let current_dir = std::env::current_dir()
        .ok()
        .map(|p| p.display().to_string());

    let files_in_public = match &state.public_dir {
        Some(dir) => list_files(dir).await,
        None => Vec::new(),
    };

    let public_dir = state.public_dir.as_deref().map(assets::absolute);
    let index_html = public_dir
        .as_ref()
        .map(|dir| dir.join("index.html").display().to_string());

    Json(DebugResponse {
        environment: DebugEnvironment {
            port: config.server.port,
            host: config.server.host.clone(),
            has_databricks_token: config.llm.has_token(),
            databricks_endpoint: config.llm.endpoint_url.clone(),
            version: env!("CARGO_PKG_VERSION"),
            working_directory: current_dir.clone(),
            files_in_public,
        },
        paths: DebugPaths {
            current_dir,
            public_dir: public_dir.map(|p| p.display().to_string()),
            index_html,
        },
    })
}

async fn list_files(dir: &std::path::Path) -> Vec<String> {
    let mut files = Vec::new();
    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Failed to list public directory {}: {}", dir.display(), e);
            return files;
        }
    };

    loop {
        match entries.next_entry().await {
            Ok(Some(entry)) => files.push(entry.path().display().to_string()),
            Ok(None) => break,
            Err(e) => {
                warn!("Stopped listing public directory {}: {}", dir.display(), e);
                break;
            }
        }
    }
    files.sort();
    files
}

pub async fn index(State(state): State<AppState>) -> Response {
    let Some(public_dir) = &state.public_dir else {
        return assets::ErrorPage::new(
            "Public directory not found. Please check the application deployment.",
        )
        .into_response();
    };

    let index_file = public_dir.join("index.html");
    match tokio::fs::read_to_string(&index_file).await {
        Ok(content) => Html(content).into_response(),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("index.html not found at {}", index_file.display());
            assets::ErrorPage::new("index.html not found in public directory.").into_response()
        }
        Err(e) => {
            error!("Error reading index.html: {}", e);
            assets::ErrorPage::new(format!("Error reading index.html: {}", e)).into_response()
        }
    }
}
