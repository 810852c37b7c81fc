//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<AuthState>` context by the root `App`. Route guards,
//! the login page and the auth interceptor coordinate through it; the
//! persistent copy lives in local storage (see `crate::session`).

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::api::{self, ApiError};
use crate::net::types::{LoginRequest, LoginResponse};
use crate::session;
use crate::util::storage::{KeyValueStore, LocalStore};

pub const USER_NOT_FOUND: &str = "User not found";
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";
pub const LOGIN_FAILED: &str = "Something went wrong. Please try again.";

/// Authentication state tracking the session and login feedback.
///
/// `loading` stays `true` until the session has been read from storage in
/// the browser, so guards never act on the server-rendered default.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub loading: bool,
    pub token: Option<String>,
    pub user: Option<serde_json::Value>,
    pub login_error: Option<String>,
    /// One-shot message for the login page, e.g. why the session ended.
    pub notice: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            loading: true,
            token: None,
            user: None,
            login_error: None,
            notice: None,
        }
    }
}

impl AuthState {
    /// Load the stored session. Corrupt user data is discarded.
    pub fn restore(&mut self, store: &impl KeyValueStore) {
        self.token = session::auth_token(store);
        self.user = session::load_user(store);
        self.loading = false;
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Record a successful login in memory and storage.
    pub fn sign_in(&mut self, store: &impl KeyValueStore, response: LoginResponse) {
        session::persist_login(store, &response);
        self.token = Some(response.token);
        self.user = (!response.user_data.is_null()).then_some(response.user_data);
        self.login_error = None;
        self.loading = false;
    }

    /// Drop the session from memory and storage.
    pub fn sign_out(&mut self, store: &impl KeyValueStore) {
        session::clear(store);
        self.token = None;
        self.user = None;
    }

    /// Apply a login result; returns whether the user is now signed in.
    pub fn apply_login_result(&mut self, store: &impl KeyValueStore, result: Result<LoginResponse, ApiError>) -> bool {
        match result {
            Ok(response) => {
                self.sign_in(store, response);
                true
            }
            Err(err) => {
                self.login_error = Some(login_error_message(&err).to_owned());
                false
            }
        }
    }
}

/// Message shown on the login form for a failed `auth/login`.
pub fn login_error_message(err: &ApiError) -> &'static str {
    match err.status() {
        Some(404) => USER_NOT_FOUND,
        Some(401) => INVALID_CREDENTIALS,
        _ => LOGIN_FAILED,
    }
}

/// Post credentials and update `auth`. Returns `true` on success.
pub async fn login(auth: RwSignal<AuthState>, request: LoginRequest) -> bool {
    auth.update(|a| a.login_error = None);
    let result = api::login(&request).await;
    if let Err(e) = &result {
        leptos::logging::warn!("login failed: {e}");
    }
    let mut success = false;
    auth.update(|a| success = a.apply_login_result(&LocalStore, result));
    success
}

/// Sign out locally. The backend keeps no session to revoke.
pub fn logout(auth: RwSignal<AuthState>) {
    auth.update(|a| a.sign_out(&LocalStore));
}
