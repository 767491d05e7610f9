//! # Domain Layer
//!
//! Quotes, explanations and the session they are shown in.
//! This layer is independent of external frameworks and infrastructure.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;
