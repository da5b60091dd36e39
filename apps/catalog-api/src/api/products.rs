//! Products API routes

use axum::Router;
use domain_products::handlers;

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    handlers::router(state.products.clone())
}

/// Load the sample board games
pub async fn seed(state: &AppState) -> eyre::Result<usize> {
    Ok(state
        .products
        .seed(domain_products::seed::catalogue())
        .await?)
}
