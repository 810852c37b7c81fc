//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the pooled HTTP client used for forwarding and the backend base URL.

use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub api_url: Arc<str>,
}

impl AppState {
    /// Upstream redirects are handed back to the browser untouched.
    pub fn new(api_url: &str) -> Self {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap_or_default();
        Self { http, api_url: Arc::from(api_url) }
    }
}
