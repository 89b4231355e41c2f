//! Networking modules for the authenticated REST client.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns bearer attachment and the global 401 cleanup, `api` exposes
//! typed endpoint calls, and `types` defines the shared wire schema.

pub mod api;
pub mod http;
pub mod types;
