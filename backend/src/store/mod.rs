//! Read access to the stock relations behind the reports
//!
//! A [`ShortfallQuery`] describes what to read; a [`ShortfallSource`] runs it.
//! The Postgres source compiles the plan to SQL, the in-memory source
//! evaluates it over loaded relations with the same join, filter and
//! ordering rules.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Serialize;
use shared::{ReportFilter, ReportOptions};

use crate::error::AppResult;

pub mod memory;
pub mod postgres;

pub use memory::MemoryShortfallSource;
pub use postgres::PgShortfallSource;

/// Read plan for one report run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortfallQuery {
    /// Left join approved suppliers
    pub supplier_join: bool,
    /// Select the item image
    pub include_image: bool,
    pub item_code: Option<String>,
    pub warehouse: Option<String>,
    /// Only honoured together with the supplier join
    pub supplier: Option<String>,
}

impl ShortfallQuery {
    pub fn new(options: &ReportOptions, filter: &ReportFilter) -> Self {
        let supplier = match (options.supplier_join, filter.supplier()) {
            (true, supplier) => supplier.map(str::to_string),
            (false, Some(supplier)) => {
                tracing::debug!(supplier, "Report has no supplier column, ignoring supplier filter");
                None
            }
            (false, None) => None,
        };

        Self {
            supplier_join: options.supplier_join,
            include_image: options.include_image,
            item_code: filter.item_code().map(str::to_string),
            warehouse: filter.warehouse().map(str::to_string),
            supplier,
        }
    }
}

/// One joined bin row as read from the store
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ShortfallRecord {
    pub image: Option<String>,
    pub item_code: String,
    pub warehouse: Option<String>,
    pub supplier: Option<String>,
    pub actual_qty: Decimal,
    pub indented_qty: Decimal,
    pub reserved_qty: Decimal,
    pub ordered_qty: Decimal,
    pub projected_qty: Decimal,
}

/// Relational query capability consumed by the report service
#[async_trait]
pub trait ShortfallSource: Send + Sync {
    /// Every bin with a negative projected quantity matching the plan,
    /// ordered by projected quantity, then item, warehouse and supplier
    async fn fetch_shortfalls(&self, query: &ShortfallQuery) -> AppResult<Vec<ShortfallRecord>>;
}
