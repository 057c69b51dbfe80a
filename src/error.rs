use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::ErrorBody;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Missing ?url parameter")]
    MissingUrl,
    #[error("Invalid Redgifs URL")]
    InvalidUrl,
    #[error("Failed to obtain auth token")]
    MissingToken,
    #[error("No video URLs found")]
    MissingUrls,
    #[error("{0}")]
    Upstream(#[from] reqwest::Error),
}

impl ResolveError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingUrl | Self::InvalidUrl => StatusCode::BAD_REQUEST,
            Self::MissingToken | Self::MissingUrls | Self::Upstream(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ResolveError {
    fn into_response(self) -> Response {
        let status = self.status();
        pretty_json(status, &ErrorBody { error: self.to_string() })
    }
}

/// Serialize `body` with two-space indentation under `status`.
pub fn pretty_json<T: serde::Serialize>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_string_pretty(body) {
        Ok(json) => (
            status,
            [(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            )],
            json,
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            )],
            serde_json::json!({ "error": e.to_string() }).to_string(),
        )
            .into_response(),
    }
}
