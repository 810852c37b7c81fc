use super::*;

#[test]
fn resolve_url_joins_relative_endpoints() {
    assert_eq!(resolve_url("/api/", LOGIN_ENDPOINT), "/api/auth/login");
    assert_eq!(resolve_url("/api", REGISTER_ENDPOINT), "/api/auth/register");
    assert_eq!(
        resolve_url("http://localhost:8080/", ORDERS_ENDPOINT),
        "http://localhost:8080/api/orders"
    );
}

#[test]
fn resolve_url_collapses_duplicate_slashes_at_join() {
    assert_eq!(resolve_url("http://host//", "auth/login"), "http://host/auth/login");
}

#[test]
fn resolve_url_keeps_absolute_paths_on_page_origin() {
    assert_eq!(resolve_url("http://localhost:8080/", COUNTRY_DATA_PATH), "/data/country.json");
    assert_eq!(resolve_url("/api/", "https://cdn.example.com/x.json"), "https://cdn.example.com/x.json");
}

#[test]
fn base_url_defaults_to_proxy_prefix() {
    if option_env!("SHELF_SENSE_API_URL").is_none() {
        assert_eq!(base_url(), DEFAULT_API_URL);
    }
}

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("abc"), "Bearer abc");
}

#[test]
fn api_error_exposes_status_and_message() {
    let err = ApiError::Status { status: 401, message: Some("Token expired".to_owned()) };
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.server_message(), Some("Token expired"));

    let err = ApiError::Network("offline".to_owned());
    assert_eq!(err.status(), None);
    assert_eq!(err.server_message(), None);
}

#[test]
fn api_error_display_mentions_status() {
    let err = ApiError::Status { status: 409, message: None };
    assert_eq!(err.to_string(), "request failed: 409");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_browser() {
    let req = LoginRequest { email: "a@b.com".to_owned(), password: "pass".to_owned() };
    let result = futures::executor::block_on(login(&req));
    assert_eq!(result, Err(ApiError::Unavailable));
}
