//! Notice delivery
//!
//! Reports return their notices as data. A sink decides how a notice reaches
//! the user; delivery is fire-and-forget and never fails the report.

use shared::{Notice, Severity};

/// Channel for advisory notices
pub trait NoticeSink: Send + Sync {
    fn show_message(&self, notice: &Notice);
}

/// Writes notices to the application log
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNoticeSink;

impl NoticeSink for TracingNoticeSink {
    fn show_message(&self, notice: &Notice) {
        let indicator = notice.severity.indicator();
        match notice.severity {
            Severity::Error => {
                tracing::error!(title = %notice.title, indicator, "{}", notice.body())
            }
            Severity::Warning => {
                tracing::warn!(title = %notice.title, indicator, "{}", notice.body())
            }
            Severity::Info => {
                tracing::info!(title = %notice.title, indicator, "{}", notice.body())
            }
        }
    }
}

/// Discards every notice
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNoticeSink;

impl NoticeSink for SilentNoticeSink {
    fn show_message(&self, _notice: &Notice) {}
}
