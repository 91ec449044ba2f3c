//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared state from Leptos context providers; route guards
//! live here alongside the presentational pieces they gate.

pub mod course_card;
pub mod curriculum_accordion;
pub mod guards;
