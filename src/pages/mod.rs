//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Auth is handled outside the pages: every route composes
//! a guard around its page in `app`.

pub mod chat;
pub mod dashboard;
pub mod landing;
pub mod login;
pub mod profile;
pub mod quiz;
pub mod signup;
