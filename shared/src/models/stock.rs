//! Stock master data read by the reports

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Stock state of one item in one warehouse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinRecord {
    pub item_code: String,
    pub warehouse: Option<String>,
    /// On-hand quantity
    pub actual_qty: Decimal,
    /// Quantity requested through material requests
    pub indented_qty: Decimal,
    pub reserved_qty: Decimal,
    pub ordered_qty: Decimal,
    /// Actual plus incoming minus reserved/requested; negative is a shortfall
    pub projected_qty: Decimal,
}

impl BinRecord {
    /// A bin with only the projected quantity set
    pub fn shortfall(item_code: &str, warehouse: &str, projected_qty: Decimal) -> Self {
        Self {
            item_code: item_code.to_string(),
            warehouse: Some(warehouse.to_string()),
            actual_qty: Decimal::ZERO,
            indented_qty: Decimal::ZERO,
            reserved_qty: Decimal::ZERO,
            ordered_qty: Decimal::ZERO,
            projected_qty,
        }
    }

    pub fn is_shortfall(&self) -> bool {
        self.projected_qty < Decimal::ZERO
    }
}

/// Item master record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Primary key, equal to the item code used by bins
    pub name: String,
    pub image: Option<String>,
}

/// One approved supplier of an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSupplierRecord {
    /// Item code the supplier row belongs to
    pub parent: String,
    pub supplier: String,
}
