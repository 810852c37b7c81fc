//! Client-side validation for the login and registration forms.
//!
//! Validation turns raw form text into the typed request bodies. A form with
//! any field error is never submitted; the messages are rendered inline next
//! to the offending inputs.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::net::types::{Gender, LoginRequest, RegisterRequest};

static LOGIN_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("login email pattern compiles")
});

// Registration is limited to Gmail addresses.
static REGISTER_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@gmail\.com$").expect("register email pattern compiles"));

pub const MIN_PASSWORD_LEN: usize = 4;
pub const PHONE_LEN: std::ops::RangeInclusive<usize> = 8..=10;

/// Per-field messages for the login form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl LoginErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// Validate login input. The email is trimmed; the password is taken verbatim.
///
/// # Errors
///
/// Returns the field messages when any field is invalid.
pub fn validate_login(email: &str, password: &str) -> Result<LoginRequest, LoginErrors> {
    let email = email.trim();
    let errors = LoginErrors {
        email: if email.is_empty() {
            Some("Email is required")
        } else if !LOGIN_EMAIL.is_match(email) {
            Some("Invalid email address")
        } else {
            None
        },
        password: if password.is_empty() {
            Some("Password is required")
        } else if password.chars().count() < MIN_PASSWORD_LEN {
            Some("Minimum 4 characters")
        } else {
            None
        },
    };
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

/// Raw registration form text as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub name: String,
    pub phone_number: String,
    /// `YYYY-MM-DD` from the date input.
    pub dob: String,
    pub gender: String,
    pub country: String,
    pub image: String,
}

/// Per-field messages for the registration form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirm_password: Option<&'static str>,
    pub name: Option<&'static str>,
    pub phone_number: Option<&'static str>,
    pub dob: Option<&'static str>,
    pub image: Option<&'static str>,
    pub gender: Option<&'static str>,
    pub country: Option<&'static str>,
}

impl RegisterErrors {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn required(value: &str, message: &'static str) -> Option<&'static str> {
    value.trim().is_empty().then_some(message)
}

fn phone_error(phone: &str) -> Option<&'static str> {
    let phone = phone.trim();
    if phone.is_empty() {
        return Some("Phone number is required");
    }
    let valid = phone.chars().all(|c| c.is_ascii_digit()) && PHONE_LEN.contains(&phone.len());
    (!valid).then_some("Wrong phone number")
}

fn parse_dob(dob: &str) -> Result<NaiveDate, &'static str> {
    let dob = dob.trim();
    if dob.is_empty() {
        return Err("Date is required");
    }
    NaiveDate::parse_from_str(dob, "%Y-%m-%d").map_err(|_| "Invalid date")
}

/// Validate the registration form and build the request body.
///
/// # Errors
///
/// Returns the field messages when any field is invalid.
pub fn validate_register(form: &RegisterForm) -> Result<RegisterRequest, RegisterErrors> {
    let email = form.email.trim();
    let dob = parse_dob(&form.dob);
    let gender = Gender::from_form_value(form.gender.trim());

    let errors = RegisterErrors {
        email: if email.is_empty() {
            Some("Email is required")
        } else if !REGISTER_EMAIL.is_match(email) {
            Some("Email is incorrect format")
        } else {
            None
        },
        password: if form.password.is_empty() {
            Some("Password is required")
        } else if form.password.chars().count() < MIN_PASSWORD_LEN {
            Some("Minimum length should be 4")
        } else {
            None
        },
        confirm_password: if form.confirm_password.is_empty() {
            Some("Confirm password is required")
        } else if form.confirm_password != form.password {
            Some("Passwords dont match")
        } else {
            None
        },
        name: required(&form.name, "Name is required"),
        phone_number: phone_error(&form.phone_number),
        dob: dob.err(),
        image: required(&form.image, "Image is required"),
        gender: gender.is_none().then_some("Gender is required"),
        country: required(&form.country, "Country is required"),
    };

    match (dob, gender) {
        (Ok(dob), Some(gender)) if errors.is_empty() => Ok(RegisterRequest {
            email: email.to_owned(),
            password: form.password.clone(),
            name: form.name.trim().to_owned(),
            phone_number: form.phone_number.trim().to_owned(),
            dob,
            gender,
            country: form.country.trim().to_owned(),
            image: form.image.trim().to_owned(),
        }),
        _ => Err(errors),
    }
}
