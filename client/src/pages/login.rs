//! Login page: email + password sign-in.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::REGISTER_PATH;
use crate::components::field_error::FieldError;
use crate::state::auth::AuthState;
use crate::validate::{LoginErrors, validate_login};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(LoginErrors::default());
    let info = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    // Show why the previous session ended, once.
    Effect::new(move || {
        if let Some(notice) = auth.get().notice {
            info.set(Some(notice));
            auth.update(|a| a.notice = None);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        info.set(None);
        let request = match validate_login(&email.get(), &password.get()) {
            Ok(request) => {
                errors.set(LoginErrors::default());
                request
            }
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                if crate::state::auth::login(auth, request).await {
                    navigate(crate::app::HOME_PATH, leptos_router::NavigateOptions::default());
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            busy.set(false);
        }
    };

    let message = move || auth.get().login_error.or_else(|| info.get());

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Shelf Sense"</h1>
                <form class="login-form" on:submit=on_submit novalidate>
                    <label for="email" class="sr-only">"Email"</label>
                    <input
                        id="email"
                        class="login-input"
                        type="email"
                        placeholder="Enter your email"
                        aria-invalid=move || if errors.get().email.is_some() { "true" } else { "false" }
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <FieldError message=Signal::derive(move || errors.get().email)/>

                    <label for="password" class="sr-only">"Password"</label>
                    <input
                        id="password"
                        class="login-input"
                        type="password"
                        placeholder="Enter your password"
                        aria-invalid=move || if errors.get().password.is_some() { "true" } else { "false" }
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <FieldError message=Signal::derive(move || errors.get().password)/>

                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
                <Show when=move || message().is_some()>
                    <p class="login-message" role="alert">{move || message().unwrap_or_default()}</p>
                </Show>
                <p class="login-card__footer">
                    "Don't have an account? "
                    <A href=REGISTER_PATH>"Register here"</A>
                </p>
            </div>
        </div>
    }
}
