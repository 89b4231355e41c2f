//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `auth`, `quiz`, etc.) so individual
//! components can depend on small focused models. `session` and `auth` form
//! the guard core; the rest back single pages.

pub mod auth;
pub mod chat;
pub mod quiz;
pub mod session;
pub mod ui;
