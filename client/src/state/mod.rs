//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` holds who is logged in, `persistence` is where that survives a
//! reload, and `role` is the claim type both of them speak.

pub mod persistence;
pub mod role;
pub mod session;
