//! # lettercount-server
//!
//! HTTP relay that answers `GET /app/B` with the letter count of the
//! upstream document's `favorite_colors` value.
//!
//! Each inbound request performs one outbound GET to the configured
//! upstream, parses the JSON body, and responds with
//! `letter_count: <N>` where `N` is the character length of the measured
//! value's text form. Failures collapse to one generic 500.

pub mod config;
pub mod error;
mod layer;
pub mod logging;
pub mod router;
pub mod routes;
pub mod server;
pub mod state;
pub mod upstream;

pub use config::{ConfigError, RelayConfig};
pub use error::RelayError;
pub use router::build_router;
pub use server::{serve, ServerError};
pub use state::AppState;
