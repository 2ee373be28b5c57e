//! Router assembly.

use crate::layer::ambient_layers;
use crate::routes::relay_routes;
use crate::state::AppState;
use axum::Router;

/// Build the relay application router.
///
/// The inbound surface is exactly one route. Unknown paths fall through
/// to axum's default 404 and other methods on the relay path get 405.
pub fn build_router(state: AppState) -> Router {
    ambient_layers(relay_routes(state))
}
