//! Business logic services for the Replenishment Reports platform

pub mod notification;
pub mod reporting;

pub use notification::{NoticeSink, SilentNoticeSink, TracingNoticeSink};
pub use reporting::ReportService;
