//! Reusable UI components.

pub mod course_card;
pub mod nav_bar;
pub mod search_bar;
