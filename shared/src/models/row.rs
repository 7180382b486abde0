//! Report rows

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::format::image_markup;

/// Item image cell
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemImage {
    pub has_image: bool,
    #[serde(default)]
    pub url: Option<String>,
}

impl ItemImage {
    /// Build the cell from the raw item image reference
    pub fn from_url(url: Option<&str>) -> Self {
        match url.map(str::trim).filter(|u| !u.is_empty()) {
            Some(url) => Self {
                has_image: true,
                url: Some(url.to_string()),
            },
            None => Self::default(),
        }
    }

    /// Thumbnail markup, empty when the item has no image
    pub fn to_markup(&self) -> String {
        match (&self.url, self.has_image) {
            (Some(url), true) => image_markup(url),
            _ => String::new(),
        }
    }
}

/// One row of a shortfall report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportRow {
    /// Present only for reports with the image column
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ItemImage>,
    pub item_code: String,
    pub warehouse: Option<String>,
    /// `None` when the item has no approved supplier or the report has no
    /// supplier column
    #[serde(default)]
    pub supplier: Option<String>,
    pub actual_qty: Decimal,
    pub projected_qty: Decimal,
    pub reserved_qty: Decimal,
    pub indented_qty: Decimal,
    pub ordered_qty: Decimal,
}

impl ReportRow {
    /// Plain-text value of a column, used by tabular exports
    pub fn cell(&self, fieldname: &str) -> Option<String> {
        match fieldname {
            "image" => self.image.as_ref().and_then(|i| i.url.clone()),
            "item_code" => Some(self.item_code.clone()),
            "warehouse" => self.warehouse.clone(),
            "supplier" => self.supplier.clone(),
            "actual_qty" => Some(self.actual_qty.normalize().to_string()),
            "projected_qty" => Some(self.projected_qty.normalize().to_string()),
            "reserved_qty" => Some(self.reserved_qty.normalize().to_string()),
            "indented_qty" => Some(self.indented_qty.normalize().to_string()),
            "ordered_qty" => Some(self.ordered_qty.normalize().to_string()),
            _ => None,
        }
    }

    /// True when both rows describe the same bin, ignoring the supplier
    pub fn same_bin(&self, other: &ReportRow) -> bool {
        self.item_code == other.item_code
            && self.warehouse == other.warehouse
            && self.image == other.image
            && self.actual_qty == other.actual_qty
            && self.projected_qty == other.projected_qty
            && self.reserved_qty == other.reserved_qty
            && self.indented_qty == other.indented_qty
            && self.ordered_qty == other.ordered_qty
    }
}
