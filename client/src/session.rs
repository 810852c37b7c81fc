//! Persistent login session: bearer token and user data in local storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth context, the protected layout and the auth interceptor all read
//! and write the session through these helpers so the storage keys and the
//! "corrupt data is discarded" rule live in one place.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::LoginResponse;
use crate::util::storage::{self, KeyValueStore};

/// Storage key holding the serialized user object.
pub const USER_DATA_KEY: &str = "userData";
/// Storage key holding the bearer token string.
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// Stored bearer token, if any. Empty strings count as absent.
pub fn auth_token(store: &impl KeyValueStore) -> Option<String> {
    store.get(AUTH_TOKEN_KEY).filter(|t| !t.is_empty())
}

pub fn has_token(store: &impl KeyValueStore) -> bool {
    auth_token(store).is_some()
}

/// Read the stored user. Malformed data is removed and treated as signed out.
pub fn load_user(store: &impl KeyValueStore) -> Option<serde_json::Value> {
    match storage::load_json::<serde_json::Value>(store, USER_DATA_KEY) {
        Ok(Some(serde_json::Value::Null) | None) => None,
        Ok(Some(user)) => Some(user),
        Err(e) => {
            leptos::logging::warn!("discarding stored user data: {e}");
            store.remove(USER_DATA_KEY);
            None
        }
    }
}

/// Write the current user, removing the key when nobody is signed in.
pub fn store_user(store: &impl KeyValueStore, user: Option<&serde_json::Value>) {
    match user {
        Some(user) if !user.is_null() => storage::save_json(store, USER_DATA_KEY, user),
        _ => store.remove(USER_DATA_KEY),
    }
}

/// Persist a successful login. The password is never written.
pub fn persist_login(store: &impl KeyValueStore, response: &LoginResponse) {
    store.set(AUTH_TOKEN_KEY, &response.token);
    store_user(store, Some(&response.user_data));
}

/// Remove every trace of the session.
pub fn clear(store: &impl KeyValueStore) {
    store.remove(USER_DATA_KEY);
    store.remove(AUTH_TOKEN_KEY);
}
