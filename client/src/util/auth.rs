//! Shared auth UI helpers: the 401 interceptor and the unauthenticated redirect.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes must apply identical session-expiry and redirect
//! behavior, so both live here and the protected layout wires them up.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::app::LOGIN_PATH;
use crate::net::api::ApiError;
use crate::net::interceptor::{self, InterceptorId};
use crate::state::auth::AuthState;
use crate::util::storage::KeyValueStore;

pub const SESSION_EXPIRED: &str = "Your session has expired. Please log in again.";
pub const TOKEN_EXPIRED: &str = "Your login session has expired. Please log in again to continue.";
pub const TOKEN_INVALID: &str = "Invalid authentication. Please log in again.";

/// Login-page message for a 401 carrying the server's `message`.
pub fn auth_error_message(server_message: Option<&str>) -> &'static str {
    match server_message {
        Some("Token expired") => TOKEN_EXPIRED,
        Some("Token invalid") => TOKEN_INVALID,
        _ => SESSION_EXPIRED,
    }
}

/// React to a failed response. On 401 the session is cleared and a notice is
/// left for the login page; returns whether the caller should redirect.
pub fn handle_auth_failure(state: &mut AuthState, store: &impl KeyValueStore, err: &ApiError) -> bool {
    if err.status() != Some(401) {
        return false;
    }
    let message = auth_error_message(err.server_message());
    leptos::logging::log!("auth error detected: {message}");
    state.sign_out(store);
    state.notice = Some(message.to_owned());
    true
}

/// Whether a guarded route should bounce to login.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && !state.is_authenticated()
}

fn replace_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Install the 401 interceptor while `store` holds a token.
///
/// Returns the interceptor handle for ejection on unmount, or `None` when no
/// session exists.
pub fn install_auth_interceptor<S, F>(auth: RwSignal<AuthState>, store: S, navigate: F) -> Option<InterceptorId>
where
    S: KeyValueStore + Clone + 'static,
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    if !crate::session::has_token(&store) {
        return None;
    }
    Some(interceptor::install(move |err| {
        let mut redirect = false;
        auth.update(|a| redirect = handle_auth_failure(a, &store, err));
        if redirect {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    }))
}

/// Redirect to the login route whenever auth has loaded and no token is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(LOGIN_PATH, replace_options());
        }
    });
}
