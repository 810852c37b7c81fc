//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render route chrome and shared form pieces while reading
//! shared state from Leptos context providers.

pub mod field_error;
pub mod previous_orders;
pub mod protected_layout;
