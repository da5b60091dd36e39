//! Users API routes

use axum::Router;
use domain_users::handlers;

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    handlers::router(state.users.clone())
}

pub async fn seed(state: &AppState) -> eyre::Result<usize> {
    Ok(state.users.seed(domain_users::seed::users()).await?)
}
