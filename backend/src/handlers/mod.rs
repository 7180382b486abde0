//! HTTP handlers

pub mod health;
pub mod reporting;

pub use health::health_check;
pub use reporting::{create_order_draft, list_reports, run_report};
