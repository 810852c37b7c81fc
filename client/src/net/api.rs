//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned as an [`ApiError`] after being offered to the
//! installed response interceptors. Pages turn errors into inline messages;
//! nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{CountryTable, LoginRequest, LoginResponse, Order, RegisterRequest};

/// Base URL used when `SHELF_SENSE_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "/api/";

pub const LOGIN_ENDPOINT: &str = "auth/login";
pub const REGISTER_ENDPOINT: &str = "auth/register";
pub const ORDERS_ENDPOINT: &str = "api/orders";
/// Static country lookup, served by the host rather than the API.
pub const COUNTRY_DATA_PATH: &str = "/data/country.json";

/// Failure of a REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No response was received.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("request failed: {status}")]
    Status { status: u16, message: Option<String> },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// HTTP status, when a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The `message` field of the server's error body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// Configured API base URL.
pub fn base_url() -> &'static str {
    option_env!("SHELF_SENSE_API_URL").unwrap_or(DEFAULT_API_URL)
}

/// Resolve `path` against `base`. Absolute paths and full URLs pass through.
#[cfg(any(test, feature = "hydrate"))]
fn resolve_url(base: &str, path: &str) -> String {
    if path.starts_with('/') || path.starts_with("http://") || path.starts_with("https://") {
        return path.to_owned();
    }
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(feature = "hydrate")]
#[derive(Clone, Copy)]
enum Verb {
    Get,
    Post,
}

/// Send a JSON request with the default headers and route failures through
/// the interceptors.
#[cfg(feature = "hydrate")]
async fn send<B: serde::Serialize>(
    verb: Verb,
    path: &str,
    body: Option<&B>,
) -> Result<gloo_net::http::Response, ApiError> {
    use crate::util::storage::LocalStore;
    use gloo_net::http::Request;

    let url = resolve_url(base_url(), path);
    let mut builder = match verb {
        Verb::Get => Request::get(&url),
        Verb::Post => Request::post(&url),
    }
    .header("Content-Type", "application/json");
    if let Some(token) = crate::session::auth_token(&LocalStore) {
        builder = builder.header("Authorization", &bearer_header(&token));
    }

    let request = match body {
        Some(body) => builder.json(body).map_err(|e| ApiError::Decode(e.to_string())),
        None => builder.build().map_err(|e| ApiError::Network(e.to_string())),
    };
    let result = match request {
        Ok(request) => request.send().await.map_err(|e| ApiError::Network(e.to_string())),
        Err(e) => Err(e),
    };
    let resp = match result {
        Ok(resp) => resp,
        Err(e) => {
            super::interceptor::dispatch(&e);
            return Err(e);
        }
    };
    if resp.ok() {
        return Ok(resp);
    }

    let status = resp.status();
    let message = resp
        .json::<super::types::ErrorBody>()
        .await
        .ok()
        .and_then(|b| b.message);
    let err = ApiError::Status { status, message };
    leptos::logging::warn!("{path}: {err}");
    super::interceptor::dispatch(&err);
    Err(err)
}

#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Sign in via `POST auth/login`.
///
/// # Errors
///
/// 404 means the user does not exist, 401 means the credentials were rejected.
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(Verb::Post, LOGIN_ENDPOINT, Some(request)).await?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST auth/register`.
///
/// # Errors
///
/// 409 means an account with this email already exists.
pub async fn register(request: &RegisterRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(Verb::Post, REGISTER_ENDPOINT, Some(request)).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the country lookup table for the registration form.
///
/// # Errors
///
/// Returns an error if the static resource cannot be fetched or parsed.
pub async fn fetch_countries() -> Result<CountryTable, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send::<()>(Verb::Get, COUNTRY_DATA_PATH, None).await?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch the signed-in user's previous orders.
///
/// # Errors
///
/// Returns an error if the request fails; a 401 also triggers the auth interceptor.
pub async fn fetch_orders() -> Result<Vec<Order>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send::<()>(Verb::Get, ORDERS_ENDPOINT, None).await?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}
