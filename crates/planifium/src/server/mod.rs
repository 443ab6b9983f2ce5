use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::server::endpoints::{sets, status};
use crate::types::AppState;

mod endpoints;
mod types;

/// Creates a router that can be used by `axum`.
///
/// # Parameters
/// - `app_state`: The app server state.
///
/// # Returns
/// The router.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(status::get_health))
        .route("/sets", post(sets::post_create_set))
        .route("/sets/:id", get(sets::get_set))
        .route("/sets/:id/schedule", get(sets::get_set_schedule))
        .route("/sets/:id/conflicts", get(sets::get_set_conflicts))
        .with_state(app_state)
}
