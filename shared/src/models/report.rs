//! Report results

use serde::{Deserialize, Serialize};

use super::{ColumnDef, DuplicateGroup, Notice, ReportKind, ReportRow};
use crate::types::Translator;

/// Result of one report run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportOutput {
    pub columns: Vec<ColumnDef>,
    pub rows: Vec<ReportRow>,
    /// Items sourced from more than one supplier; informational only
    #[serde(default)]
    pub duplicates: Vec<DuplicateGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}

impl ReportOutput {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Catalogue entry describing an available report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportDescriptor {
    pub kind: ReportKind,
    pub title: String,
    pub columns: Vec<ColumnDef>,
}

impl ReportDescriptor {
    pub fn new(kind: ReportKind, t: &dyn Translator) -> Self {
        Self {
            kind,
            title: t.translate(kind.title()),
            columns: kind.options().columns(t),
        }
    }
}
