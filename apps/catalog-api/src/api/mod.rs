//! API routes module

pub mod products;
pub mod users;

use axum::Router;
use tracing::info;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/products", products::router(state))
        .nest("/users", users::router(state))
}

/// Load sample data through the regular create path
pub async fn seed(state: &AppState) -> eyre::Result<()> {
    let products = products::seed(state).await?;
    let users = users::seed(state).await?;
    info!("Sample data loaded: {} products, {} users", products, users);
    Ok(())
}
