//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed config and one pooled HTTP client reused for every
//! forwarded request.

use std::sync::Arc;

use crate::config::GatewayConfig;
use crate::error::GatewayError;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    /// Build state with an upstream client that relays redirects instead of
    /// following them.
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { config: Arc::new(config), http })
    }
}
