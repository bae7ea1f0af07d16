//! HTTP API module
//!
//! Thin axum layer over the board: every handler delegates to the core
//! services and maps typed errors to transport statuses.

pub mod http;
pub mod rest;
pub mod state;
