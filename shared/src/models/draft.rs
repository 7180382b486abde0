//! Purchase documents drafted from selected report rows
//!
//! Drafts are computed only; saving them is left to the host application.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ReportRow;
use crate::validation::is_orderable_qty;

/// Default number of days between drafting and the required-by date
pub const DEFAULT_LEAD_DAYS: u64 = 7;

/// Purchase document to draft
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderKind {
    MaterialRequest,
    PurchaseOrder,
}

impl std::fmt::Display for OrderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderKind::MaterialRequest => write!(f, "Material Request"),
            OrderKind::PurchaseOrder => write!(f, "Purchase Order"),
        }
    }
}

/// A report row picked in the grid.
///
/// The quantity may have been edited by the user, so every field is optional
/// and checked before drafting.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SelectedRow {
    #[serde(default)]
    pub item_code: Option<String>,
    #[serde(default)]
    pub warehouse: Option<String>,
    #[serde(default)]
    pub supplier: Option<String>,
    #[serde(default)]
    pub projected_qty: Option<Decimal>,
}

impl From<&ReportRow> for SelectedRow {
    fn from(row: &ReportRow) -> Self {
        Self {
            item_code: Some(row.item_code.clone()),
            warehouse: row.warehouse.clone(),
            supplier: row.supplier.clone(),
            projected_qty: Some(row.projected_qty),
        }
    }
}

/// One line of a drafted document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderDraftLine {
    pub item_code: String,
    pub warehouse: Option<String>,
    pub supplier: Option<String>,
    pub qty: Decimal,
    pub schedule_date: NaiveDate,
}

/// Unsaved purchase document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderDraft {
    pub kind: OrderKind,
    /// Set to `Purchase` for material requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material_request_type: Option<String>,
    pub schedule_date: NaiveDate,
    pub items: Vec<OrderDraftLine>,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderDraftError {
    #[error("Please select rows to create {kind}")]
    NoRowsSelected { kind: OrderKind },

    #[error("No valid items to create {kind}.")]
    NoValidItems { kind: OrderKind },

    #[error("Schedule date out of range")]
    ScheduleOutOfRange,
}

/// Draft a document ordering the shortfall of each valid selected row.
///
/// Rows without an item code or with a zero/missing quantity are dropped;
/// the ordered quantity is the absolute projected quantity.
pub fn build_order_draft(
    kind: OrderKind,
    rows: &[SelectedRow],
    today: NaiveDate,
    lead_days: u64,
) -> Result<OrderDraft, OrderDraftError> {
    if rows.is_empty() {
        return Err(OrderDraftError::NoRowsSelected { kind });
    }

    let schedule_date = today
        .checked_add_days(Days::new(lead_days))
        .ok_or(OrderDraftError::ScheduleOutOfRange)?;

    let items: Vec<OrderDraftLine> = rows
        .iter()
        .filter_map(|row| {
            let item_code = row.item_code.as_deref().map(str::trim).filter(|c| !c.is_empty())?;
            if !is_orderable_qty(row.projected_qty) {
                return None;
            }
            Some(OrderDraftLine {
                item_code: item_code.to_string(),
                warehouse: row.warehouse.clone(),
                supplier: row.supplier.clone(),
                qty: row.projected_qty.unwrap_or_default().abs(),
                schedule_date,
            })
        })
        .collect();

    if items.is_empty() {
        return Err(OrderDraftError::NoValidItems { kind });
    }

    Ok(OrderDraft {
        kind,
        material_request_type: match kind {
            OrderKind::MaterialRequest => Some("Purchase".to_string()),
            OrderKind::PurchaseOrder => None,
        },
        schedule_date,
        items,
    })
}
