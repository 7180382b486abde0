//! Shared types and logic for the Replenishment Reports platform
//!
//! This crate contains the report model (filters, columns, rows, duplicate
//! detection, order drafts) shared between the backend and the browser
//! helpers compiled to WASM.

pub mod format;
pub mod models;
pub mod types;
pub mod validation;

pub use format::*;
pub use models::*;
pub use types::*;
pub use validation::*;
