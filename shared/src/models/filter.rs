//! Report filter set

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::validate_link_name;

/// Optional filters applied on top of the shortfall predicate.
///
/// A missing, empty or whitespace-only value places no constraint on its
/// field. Present values are compared with equality after trimming.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ReportFilter {
    #[serde(default)]
    #[validate(custom = "validate_link_name")]
    pub item_code: Option<String>,

    #[serde(default)]
    #[validate(custom = "validate_link_name")]
    pub warehouse: Option<String>,

    #[serde(default)]
    #[validate(custom = "validate_link_name")]
    pub supplier: Option<String>,
}

impl ReportFilter {
    pub fn item_code(&self) -> Option<&str> {
        non_empty(&self.item_code)
    }

    pub fn warehouse(&self) -> Option<&str> {
        non_empty(&self.warehouse)
    }

    pub fn supplier(&self) -> Option<&str> {
        non_empty(&self.supplier)
    }

    /// True when no filter constrains the report
    pub fn is_empty(&self) -> bool {
        self.item_code().is_none() && self.warehouse().is_none() && self.supplier().is_none()
    }

    pub fn with_item_code(mut self, item_code: &str) -> Self {
        self.item_code = Some(item_code.to_string());
        self
    }

    pub fn with_warehouse(mut self, warehouse: &str) -> Self {
        self.warehouse = Some(warehouse.to_string());
        self
    }

    pub fn with_supplier(mut self, supplier: &str) -> Self {
        self.supplier = Some(supplier.to_string());
        self
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
