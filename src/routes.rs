use axum::{
    extract::{RawQuery, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tower::ServiceBuilder;
use tower_http::ServiceBuilderExt;
use tracing::{error, info, warn};

use crate::{
    app_state::AppState,
    error::{pretty_json, ResolveError},
    models::ResolvedClip,
    resolver::{extract_id, resolve_clip},
};

pub fn create_routes(state: AppState) -> Router {
    let layers = ServiceBuilder::new()
        .trace_for_http()
        .override_response_header(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        );

    // Every path resolves, the same as `/`.
    Router::new()
        .route("/", any(resolve))
        .fallback(resolve)
        .layer(layers)
        .with_state(state)
}

/// First `url` value in the query string, form-decoded. Empty counts as missing.
pub fn url_param(query: Option<&str>) -> Option<String> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query?).ok()?;
    pairs
        .into_iter()
        .find(|(key, _)| key == "url")
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

async fn resolve(State(state): State<AppState>, RawQuery(query): RawQuery) -> Response {
    match try_resolve(&state, query.as_deref()).await {
        Ok(clip) => {
            info!(id = %clip.id, "Resolved clip");
            pretty_json(StatusCode::OK, &clip)
        }
        Err(e) => {
            if e.status().is_client_error() {
                warn!(error = %e, "Rejected request");
            } else {
                error!(error = %e, "Failed to resolve clip");
            }
            e.into_response()
        }
    }
}

async fn try_resolve(
    state: &AppState,
    query: Option<&str>,
) -> Result<ResolvedClip, ResolveError> {
    let input = url_param(query).ok_or(ResolveError::MissingUrl)?;
    let id = extract_id(&input).ok_or(ResolveError::InvalidUrl)?;
    resolve_clip(&state.client, &state.api_base, id).await
}
