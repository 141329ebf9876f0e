use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Message returned to callers whenever the inference endpoint misbehaves.
pub const GENERATION_FAILED: &str = "Failed to generate excuse";

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid request body: {0}")]
    JsonRejection(#[from] JsonRejection),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Timeout calling inference endpoint")]
    UpstreamTimeout,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::JsonRejection(rejection) => rejection.status(),
            Self::Upstream(_) | Self::Network(_) => StatusCode::BAD_GATEWAY,
            Self::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Upstream details stay in the logs; callers only learn that generation failed.
        let (error, details) = match self {
            Self::Validation(err) => ("Validation error".to_string(), Some(err.to_string())),
            Self::JsonRejection(rejection) => {
                ("Invalid request".to_string(), Some(rejection.body_text()))
            }
            Self::Config(msg) => ("Configuration error".to_string(), Some(msg)),
            Self::Upstream(_) | Self::Network(_) => (GENERATION_FAILED.to_string(), None),
            Self::UpstreamTimeout => (
                GENERATION_FAILED.to_string(),
                Some("Timeout calling inference endpoint".to_string()),
            ),
            other => ("Internal server error".to_string(), Some(other.to_string())),
        };

        (
            status,
            Json(ErrorResponse {
                success: false,
                error,
                details,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            Error::config("missing").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            Error::upstream("boom").status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            Error::UpstreamTimeout.status_code(),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            Error::internal("oops").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_upstream_message_is_generic() {
        let response = Error::upstream("secret upstream body").into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
