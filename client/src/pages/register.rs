//! Registration page: account form with a country picker.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::LOGIN_PATH;
use crate::components::field_error::FieldError;
use crate::net::api::ApiError;
use crate::net::types::CountryTable;
use crate::validate::{RegisterErrors, RegisterForm, validate_register};

pub const DUPLICATE_ACCOUNT: &str = "An account with this email already exists";
pub const REGISTER_FAILED: &str = "Something went wrong. Please try again later";

/// Form-level message for a failed `auth/register`.
pub fn register_error_message(err: &ApiError) -> String {
    match err.status() {
        Some(409) => err.server_message().unwrap_or(DUPLICATE_ACCOUNT).to_owned(),
        _ => REGISTER_FAILED.to_owned(),
    }
}

/// Country display names in the order the select control lists them.
pub fn country_options(table: &CountryTable) -> Vec<String> {
    table.values().cloned().collect()
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let form = RwSignal::new(RegisterForm::default());
    let errors = RwSignal::new(RegisterErrors::default());
    let root_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let countries = RwSignal::new(CountryTable::new());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_countries().await {
            Ok(table) => countries.set(table),
            Err(e) => leptos::logging::warn!("country list unavailable: {e}"),
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        root_error.set(None);
        let request = match validate_register(&form.get()) {
            Ok(request) => {
                errors.set(RegisterErrors::default());
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
                match crate::net::api::register(&request).await {
                    Ok(()) => navigate(LOGIN_PATH, leptos_router::NavigateOptions::default()),
                    Err(e) => root_error.set(Some(register_error_message(&e))),
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

    view! {
        <div class="register-page">
            <h3>"Register"</h3>
            <form class="register-form" on:submit=on_submit novalidate>
                {text_input(form, "Enter your email", "email", |f| &f.email, |f, v| f.email = v)}
                <FieldError message=Signal::derive(move || errors.get().email)/>

                {text_input(form, "Enter your password", "password", |f| &f.password, |f, v| f.password = v)}
                <FieldError message=Signal::derive(move || errors.get().password)/>

                {text_input(form, "Confirm your password", "password", |f| &f.confirm_password, |f, v| f.confirm_password = v)}
                <FieldError message=Signal::derive(move || errors.get().confirm_password)/>

                {text_input(form, "Enter your name", "text", |f| &f.name, |f, v| f.name = v)}
                <FieldError message=Signal::derive(move || errors.get().name)/>

                {text_input(form, "Enter your phone number", "tel", |f| &f.phone_number, |f, v| f.phone_number = v)}
                <FieldError message=Signal::derive(move || errors.get().phone_number)/>

                <input
                    class="register-input register-input--dob"
                    type="date"
                    aria-label="Date of birth"
                    prop:value=move || form.get().dob
                    on:input=move |ev| form.update(|f| f.dob = event_target_value(&ev))
                />
                <FieldError message=Signal::derive(move || errors.get().dob)/>

                {text_input(form, "Enter your image link", "text", |f| &f.image, |f, v| f.image = v)}
                <FieldError message=Signal::derive(move || errors.get().image)/>

                <div class="register-gender">
                    {gender_radio(form, "male", "Male")}
                    {gender_radio(form, "female", "Female")}
                </div>
                <FieldError message=Signal::derive(move || errors.get().gender)/>

                <select
                    class="register-country"
                    prop:value=move || form.get().country
                    on:change=move |ev| form.update(|f| f.country = event_target_value(&ev))
                >
                    <option value="">"select"</option>
                    {move || {
                        country_options(&countries.get())
                            .into_iter()
                            .map(|name| view! { <option value=name.clone()>{name.clone()}</option> })
                            .collect::<Vec<_>>()
                    }}
                </select>
                <FieldError message=Signal::derive(move || errors.get().country)/>

                <button class="register-button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Submitting...." } else { "Register" }}
                </button>
                <Show when=move || root_error.get().is_some()>
                    <p class="form-error form-error--root" role="alert">{move || root_error.get().unwrap_or_default()}</p>
                </Show>
            </form>
            <p class="register-page__footer">
                "Already registered? "
                <A href=LOGIN_PATH>"Log in"</A>
            </p>
        </div>
    }
}

fn text_input(
    form: RwSignal<RegisterForm>,
    placeholder: &'static str,
    kind: &'static str,
    get: fn(&RegisterForm) -> &String,
    set: fn(&mut RegisterForm, String),
) -> impl IntoView {
    view! {
        <input
            class="register-input"
            type=kind
            placeholder=placeholder
            prop:value=move || get(&form.get()).clone()
            on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
        />
    }
}

fn gender_radio(form: RwSignal<RegisterForm>, value: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <label class="register-gender__item">
            <input
                type="radio"
                name="gender"
                value=value
                prop:checked=move || form.get().gender == value
                on:change=move |_| form.update(|f| f.gender = value.to_owned())
            />
            {label}
        </label>
    }
}
