//! Wire DTOs for the REST API boundary.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON so serde round-trips stay
//! lossless. User data is kept as free-form JSON because the backend owns its
//! shape and the client only persists and echoes it.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Credentials posted to `auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful `auth/login` payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Opaque bearer token for subsequent requests.
    pub token: String,
    /// Profile data for the signed-in user; shape is owned by the backend.
    #[serde(rename = "userData", default)]
    pub user_data: serde_json::Value,
}

/// Gender choices offered by the registration form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Parse the radio-button value used by the registration form.
    pub fn from_form_value(value: &str) -> Option<Self> {
        match value {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            _ => None,
        }
    }
}

/// Body posted to `auth/register`. The confirmation password never leaves the form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone_number: String,
    pub dob: NaiveDate,
    pub gender: Gender,
    pub country: String,
    pub image: String,
}

/// JSON error body returned by the backend on failures.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Country id to display-name lookup served from `/data/country.json`.
pub type CountryTable = BTreeMap<String, String>;

/// A previously placed order with its line items.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub order_number: String,
    pub order_date: NaiveDate,
    #[serde(default)]
    pub items: Vec<ShoppedItem>,
}

/// One purchased line on an order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppedItem {
    pub id: i64,
    /// Product name as printed on the receipt.
    pub raw_name: String,
    /// Package size such as `"125 g"` or `"6 pcs"`.
    #[serde(default)]
    pub weight_or_volume: Option<String>,
    /// Normalized product name, when the backend classified the item.
    #[serde(default)]
    pub general_name: Option<String>,
    #[serde(default)]
    pub food_type: Option<String>,
    pub quantity: i32,
}
