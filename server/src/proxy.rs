//! `/api/*` forwarding to the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this host. Requests under `/api` are
//! replayed against the backend with the prefix stripped, and the backend's
//! status and body are returned verbatim so the client sees the real
//! 401/404/409 responses.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Request headers copied to the backend.
const FORWARDED_HEADERS: [HeaderName; 3] = [header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT];

/// Response headers copied back to the browser. `Location` keeps backend
/// redirects intact since the upstream client does not follow them.
const RETURNED_HEADERS: [HeaderName; 2] = [header::CONTENT_TYPE, header::LOCATION];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("backend unreachable: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "proxy request failed");
        let body = serde_json::json!({ "message": "Backend unavailable" });
        (StatusCode::BAD_GATEWAY, Json(body)).into_response()
    }
}

/// Backend URL for a request path below `/api` plus its query string.
pub(crate) fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let mut url = format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'));
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    url
}

fn copy_headers(incoming: &HeaderMap, names: &[HeaderName]) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in names {
        if let Some(value) = incoming.get(name) {
            out.insert(name.clone(), value.clone());
        }
    }
    out
}

/// Copy the headers the backend cares about; hop-by-hop and cookie headers stay behind.
pub(crate) fn forwarded_headers(incoming: &HeaderMap) -> HeaderMap {
    copy_headers(incoming, &FORWARDED_HEADERS)
}

/// Backend response headers worth returning to the browser.
pub(crate) fn returned_headers(upstream: &HeaderMap) -> HeaderMap {
    copy_headers(upstream, &RETURNED_HEADERS)
}

/// `ANY /api/{*path}` — replay the request against the backend.
pub async fn forward(
    State(state): State<AppState>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.api_url, &path, query.as_deref());
    tracing::debug!(%method, %url, "forwarding");

    let upstream = state
        .http
        .request(method, &url)
        .headers(forwarded_headers(&headers))
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let returned = returned_headers(upstream.headers());
    let bytes = upstream.bytes().await?;
    if status.is_server_error() {
        tracing::warn!(%status, %url, "backend error");
    }

    let mut response = (status, bytes).into_response();
    response.headers_mut().extend(returned);
    Ok(response)
}
