use axum::http::{HeaderMap, Uri};
use axum::response::IntoResponse;
use axum::routing::post;

use super::*;

/// Serve `router` on an ephemeral local port and return its base URL.
async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    format!("http://{addr}")
}

/// Fake backend: `auth/login` accepts one user, `api/orders` requires a bearer token.
fn fake_backend() -> Router {
    async fn login(body: String) -> axum::response::Response {
        let creds: serde_json::Value = serde_json::from_str(&body).unwrap_or_default();
        if creds["email"] == "ada@gmail.com" && creds["password"] == "secret" {
            axum::Json(serde_json::json!({ "token": "tok-1", "userData": { "name": "Ada" } })).into_response()
        } else if creds["email"] == "ada@gmail.com" {
            (StatusCode::UNAUTHORIZED, axum::Json(serde_json::json!({ "message": "Bad credentials" })))
                .into_response()
        } else {
            StatusCode::NOT_FOUND.into_response()
        }
    }

    async fn orders(headers: HeaderMap, uri: Uri) -> axum::response::Response {
        match headers.get("authorization").and_then(|v| v.to_str().ok()) {
            Some("Bearer tok-1") => axum::Json(serde_json::json!({ "query": uri.query() })).into_response(),
            _ => (StatusCode::UNAUTHORIZED, axum::Json(serde_json::json!({ "message": "Token expired" })))
                .into_response(),
        }
    }

    async fn moved() -> axum::response::Response {
        (StatusCode::FOUND, [(axum::http::header::LOCATION, "/auth/login")]).into_response()
    }

    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/signin", post(moved))
        .route("/api/orders", get(orders))
}

#[tokio::test]
async fn healthz_returns_ok() {
    let host = spawn(api_routes(AppState::new("http://127.0.0.1:9/"))).await;
    let resp = reqwest::get(format!("{host}/healthz")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
}

#[tokio::test]
async fn proxy_forwards_login_and_returns_backend_body() {
    let backend = spawn(fake_backend()).await;
    let host = spawn(api_routes(AppState::new(&format!("{backend}/")))).await;

    let resp = reqwest::Client::new()
        .post(format!("{host}/api/auth/login"))
        .json(&serde_json::json!({ "email": "ada@gmail.com", "password": "secret" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert_eq!(
        resp.headers().get("content-type").unwrap().to_str().unwrap(),
        "application/json"
    );
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["token"], "tok-1");
    assert_eq!(body["userData"]["name"], "Ada");
}

#[tokio::test]
async fn proxy_passes_through_error_statuses() {
    let backend = spawn(fake_backend()).await;
    let host = spawn(api_routes(AppState::new(&backend))).await;
    let client = reqwest::Client::new();

    let wrong_password = client
        .post(format!("{host}/api/auth/login"))
        .json(&serde_json::json!({ "email": "ada@gmail.com", "password": "nope" }))
        .send()
        .await
        .unwrap();
    assert_eq!(wrong_password.status(), reqwest::StatusCode::UNAUTHORIZED);

    let unknown_user = client
        .post(format!("{host}/api/auth/login"))
        .json(&serde_json::json!({ "email": "bob@gmail.com", "password": "secret" }))
        .send()
        .await
        .unwrap();
    assert_eq!(unknown_user.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn proxy_forwards_authorization_and_query() {
    let backend = spawn(fake_backend()).await;
    let host = spawn(api_routes(AppState::new(&backend))).await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{host}/api/api/orders?page=2"))
        .header("authorization", "Bearer tok-1")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["query"], "page=2");

    let expired = client.get(format!("{host}/api/api/orders")).send().await.unwrap();
    assert_eq!(expired.status(), reqwest::StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = expired.json().await.unwrap();
    assert_eq!(body["message"], "Token expired");
}

#[tokio::test]
async fn proxy_reports_bad_gateway_when_backend_is_down() {
    // Reserve a port, then close it so nothing is listening there.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead = format!("http://{}/", listener.local_addr().unwrap());
    drop(listener);

    let host = spawn(api_routes(AppState::new(&dead))).await;
    let resp = reqwest::Client::new()
        .post(format!("{host}/api/auth/login"))
        .json(&serde_json::json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Backend unavailable");
}

#[tokio::test]
async fn proxy_returns_backend_redirects_unfollowed() {
    let backend = spawn(fake_backend()).await;
    let host = spawn(api_routes(AppState::new(&backend))).await;
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    let resp = client
        .post(format!("{host}/api/auth/signin"))
        .json(&serde_json::json!({ "email": "ada@gmail.com", "password": "secret" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::FOUND);
    assert_eq!(resp.headers().get("location").unwrap().to_str().unwrap(), "/auth/login");
}
