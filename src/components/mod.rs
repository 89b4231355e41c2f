//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `guard` and `route_watcher` form the session-guard core composed around
//! every routed page; the rest render shared chrome while reading state from
//! Leptos context providers.

pub mod guard;
pub mod metric_card;
pub mod nav_bar;
pub mod reveal_text;
pub mod route_watcher;
