//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Quote source (Quotable HTTP API, offline mock)
//! - Chat completion (OpenAI-compatible HTTP API, offline mock)
//! - Dependency container, CLI router and controllers
//! - Web front-end (axum)

pub mod adapter;
pub mod api;
pub mod web;

pub use adapter::*;
pub use api::*;
