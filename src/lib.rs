pub mod app_state;
pub mod config;
pub mod error;
pub mod models;
pub mod resolver;
pub mod routes;

pub use app_state::AppState;
pub use config::Config;
pub use error::ResolveError;
pub use routes::create_routes;

use anyhow::Result;
use tracing::info;

pub async fn run(config: Config) -> Result<()> {
    let state = AppState::new(&config)?;
    let app = create_routes(state);

    let addr = config.addr();
    let server = axum::Server::try_bind(&addr)?.serve(app.into_make_service());
    info!(addr = %server.local_addr(), api_base = %config.api_base, "Listening");
    server.await?;
    Ok(())
}
