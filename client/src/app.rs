//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::protected_layout::ProtectedLayout;
use crate::pages::{home::HomePage, login::LoginPage, register::RegisterPage};
use crate::session;
use crate::state::auth::AuthState;
use crate::util::storage::LocalStore;

/// Application mount point.
pub const BASE_PATH: &str = "/shelf-sense";
pub const LOGIN_PATH: &str = BASE_PATH;
pub const REGISTER_PATH: &str = "/shelf-sense/register";
pub const HOME_PATH: &str = "/shelf-sense/home";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth context, restores the stored session once running in
/// the browser, and keeps stored user data in sync with it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    // Effects only run in the browser, after hydration.
    Effect::new(move || auth.update(|a| a.restore(&LocalStore)));
    Effect::new(move || {
        let state = auth.get();
        if !state.loading {
            session::store_user(&LocalStore, state.user.as_ref());
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/shelf-sense.css"/>
        <Title text="Shelf Sense"/>

        <main class="app-frame">
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("shelf-sense") view=LoginPage/>
                    <Route path=(StaticSegment("shelf-sense"), StaticSegment("register")) view=RegisterPage/>
                    <ParentRoute path=(StaticSegment("shelf-sense"), StaticSegment("home")) view=ProtectedLayout>
                        <Route path=StaticSegment("") view=HomePage/>
                    </ParentRoute>
                </Routes>
            </Router>
        </main>
    }
}
