//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs HTTP calls, `interceptor` lets route layouts observe failed
//! responses, and `types` defines the wire schema.

pub mod api;
pub mod interceptor;
pub mod types;
