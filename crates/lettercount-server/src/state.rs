//! Shared application state.

use crate::config::RelayConfig;
use std::sync::Arc;

/// Cheap-clone handle shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: RelayConfig,
    http: reqwest::Client,
}

impl AppState {
    /// Build application state around the loaded config and the shared
    /// outbound client.
    pub fn new(config: RelayConfig, http: reqwest::Client) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, http }),
        }
    }

    pub fn config(&self) -> &RelayConfig {
        &self.inner.config
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.inner.http
    }
}
