//! The relay endpoint.

use crate::error::RelayError;
use crate::state::AppState;
use crate::upstream::{fetch_document, UPSTREAM_FIELD};
use axum::extract::State;
use axum::routing::get;
use axum::Router;
use lettercount_core::{field_or_null, letter_count};

/// Path served by the relay.
pub const RELAY_PATH: &str = "/app/B";

/// Returns a router with the `GET /app/B` endpoint.
pub fn relay_routes(state: AppState) -> Router {
    Router::new()
        .route(RELAY_PATH, get(relay_handler))
        .with_state(state)
}

/// Handle one inbound request: fetch the upstream document, measure its
/// `favorite_colors` value, and answer with the letter count.
async fn relay_handler(State(state): State<AppState>) -> Result<String, RelayError> {
    let doc = fetch_document(state.http(), &state.config().upstream_url).await?;
    let value = field_or_null(&doc, UPSTREAM_FIELD);
    let count = letter_count(value).map_err(RelayError::Render)?;

    Ok(format!("letter_count: {count}"))
}
