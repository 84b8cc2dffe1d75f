//! Shared types for the Flock platform
//!
//! Common types used across crates: domain models, the form
//! configuration engine, error types, response structures, and
//! utility helpers.

pub mod error;
pub mod forms;
pub mod models;
pub mod util;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};
