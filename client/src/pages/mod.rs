//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (validation, submission,
//! navigation) and delegates rendering details to `components`.

pub mod home;
pub mod login;
pub mod register;
