use std::sync::Arc;

use anyhow::Result;
use reqwest::Client;

use crate::config::Config;

/// Shared across requests. Holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    pub client: Client,
    pub api_base: Arc<str>,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').into(),
        })
    }
}
