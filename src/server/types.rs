use serde::Serialize;

pub const SERVICE_NAME: &str = "excuse-gen";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub service: &'static str,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub app_info: AppInfo,
    pub environment: MetricsEnvironment,
}

#[derive(Debug, Serialize)]
pub struct AppInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MetricsEnvironment {
    pub port: u16,
    pub host: String,
    pub has_token: bool,
    pub endpoint_configured: bool,
}

#[derive(Debug, Serialize)]
pub struct DebugResponse {
    pub environment: DebugEnvironment,
    pub paths: DebugPaths,
}

#[derive(Debug, Serialize)]
pub struct DebugEnvironment {
    pub port: u16,
    pub host: String,
    pub has_databricks_token: bool,
    pub databricks_endpoint: String,
    pub version: &'static str,
    pub working_directory: Option<String>,
    pub files_in_public: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DebugPaths {
    pub current_dir: Option<String>,
    pub public_dir: Option<String>,
    pub index_html: Option<String>,
}
