//! Browser glue shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules isolate `web-sys` access behind `hydrate` so state and
//! routing logic stays testable on the host.

pub mod clock;
pub mod cookie;
pub mod storage;
