//! Route guard for authenticated pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps nested routes: while mounted it keeps the 401 interceptor attached
//! to the REST client, and it bounces to login when no token is stored.

use std::sync::{Arc, Mutex};

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::net::interceptor;
use crate::state::auth::AuthState;
use crate::util::auth::{install_auth_interceptor, install_unauth_redirect};
use crate::util::storage::LocalStore;

/// Renders the child route only for an authenticated session.
#[component]
pub fn ProtectedLayout() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    install_unauth_redirect(auth, navigate.clone());

    // Attach once the session is known; eject on unmount.
    let installed = Arc::new(Mutex::new(None::<interceptor::InterceptorId>));
    let installed_effect = Arc::clone(&installed);
    Effect::new(move || {
        if auth.get().loading {
            return;
        }
        let Ok(mut slot) = installed_effect.lock() else {
            return;
        };
        if slot.is_none() {
            *slot = install_auth_interceptor(auth, LocalStore, navigate.clone());
        }
    });
    on_cleanup(move || {
        if let Some(id) = installed.lock().ok().and_then(|mut slot| slot.take()) {
            interceptor::eject(id);
        }
    });

    view! {
        <Show
            when=move || !auth.get().loading && auth.get().is_authenticated()
            fallback=move || {
                view! {
                    <div class="guard-page">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <Outlet/>
        </Show>
    }
}
