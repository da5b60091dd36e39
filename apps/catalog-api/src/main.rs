//! Catalog API - REST server for the board-game catalogue and users

use axum_helpers::server::{create_app, create_router, health_router};
use axum_helpers::cors_layer;
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let state = AppState::new(config);

    if state.config.seed_data {
        api::seed(&state).await?;
    } else {
        info!("SEED_DATA disabled, starting with empty collections");
    }

    let cors = cors_layer(&state.config.cors, &state.config.environment)?;
    let router = create_router::<openapi::ApiDoc>(api::routes(&state), cors);
    let app = router.merge(health_router(state.config.app));

    info!(
        "Starting Catalog API on {} (docs at /swagger-ui)",
        state.config.server
    );

    create_app(app, &state.config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Catalog API shutdown complete");
    Ok(())
}
