//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped data fetching and delegates rendering details
//! to `components`. Access control is not done here; `app::Guarded` wraps
//! every page.

pub mod account;
pub mod admin;
pub mod courses;
pub mod favorites;
pub mod home;
pub mod info;
pub mod login;
pub mod search;
