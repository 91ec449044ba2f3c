//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Guarding is done by the router, not by the pages.

pub mod about;
pub mod admin_courses;
pub mod course;
pub mod home;
pub mod login;
pub mod status;
