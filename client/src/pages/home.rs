//! Home page: the signed-in user's previous orders.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered inside `ProtectedLayout`, so a session is present whenever this
//! page mounts.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::LOGIN_PATH;
use crate::components::previous_orders::PreviousOrders;
use crate::state::auth::{AuthState, logout};

/// Greeting name from free-form user data: `name`, then `email`.
pub fn display_name(user: Option<&serde_json::Value>) -> String {
    user.and_then(|u| {
        ["name", "email"]
            .iter()
            .find_map(|key| {
                u.get(*key)
                    .and_then(serde_json::Value::as_str)
                    .filter(|s| !s.trim().is_empty())
            })
    })
    .unwrap_or("there")
    .to_owned()
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        logout(auth);
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <span class="home-page__greeting">
                    "Hello, " {move || display_name(auth.get().user.as_ref())}
                </span>
                <button class="btn home-page__logout" on:click=on_logout>
                    "Logout"
                </button>
            </header>
            <PreviousOrders/>
        </div>
    }
}
