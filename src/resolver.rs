use reqwest::{Client, Url};
use tracing::debug;

use crate::{
    error::ResolveError,
    models::{GifResponse, ResolvedClip, TokenResponse},
};

pub const DEFAULT_API_BASE: &str = "https://api.redgifs.com";

/// Last non-empty path segment of `input`, e.g. `abcdef` for
/// `https://www.redgifs.com/watch/abcdef` or `https://redgifs.com/ifr/abcdef/`.
pub fn extract_id(input: &str) -> Option<String> {
    let url = Url::parse(input).ok()?;
    url.path()
        .split('/')
        .filter(|segment| !segment.is_empty())
        .last()
        .map(String::from)
}

pub async fn fetch_token(client: &Client, api_base: &str) -> Result<String, ResolveError> {
    let url = format!("{}/v2/auth/temporary", api_base.trim_end_matches('/'));
    debug!(%url, "Requesting temporary token");

    let body = client
        .get(&url)
        .send()
        .await?
        .json::<Option<TokenResponse>>()
        .await?
        .unwrap_or_default();

    body.token
        .filter(|token| !token.is_empty())
        .ok_or(ResolveError::MissingToken)
}

pub async fn fetch_gif(
    client: &Client,
    api_base: &str,
    id: &str,
    token: &str,
) -> Result<GifResponse, ResolveError> {
    let url = format!("{}/v2/gifs/{id}", api_base.trim_end_matches('/'));
    debug!(%url, "Fetching gif metadata");

    let body = client
        .get(&url)
        .bearer_auth(token)
        .send()
        .await?
        .json::<Option<GifResponse>>()
        .await?
        .unwrap_or_default();
    Ok(body)
}

/// Token, then metadata, then the best media URL. The calls are sequential
/// because the second needs the token from the first.
pub async fn resolve_clip(
    client: &Client,
    api_base: &str,
    id: String,
) -> Result<ResolvedClip, ResolveError> {
    let token = fetch_token(client, api_base).await?;
    let gif = fetch_gif(client, api_base, &id, &token).await?;

    let urls = gif
        .gif
        .and_then(|info| info.urls)
        .ok_or(ResolveError::MissingUrls)?;
    let mp4 = urls.best().ok_or(ResolveError::MissingUrls)?.to_string();

    Ok(ResolvedClip { id, mp4 })
}
