//! Report variants and their column layouts

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ColumnDef;
use crate::types::Translator;

/// Grouping scope used when looking for items sourced from several suppliers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateScope {
    /// Same item in the same warehouse
    ItemWarehouse,
    /// Same item, warehouse ignored
    Item,
}

/// Shape of a shortfall report
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportOptions {
    /// Left join approved suppliers, one row per supplier
    pub supplier_join: bool,
    /// Add the item image column
    pub include_image: bool,
    /// Look for duplicate suppliers, `None` disables the check
    pub duplicate_scope: Option<DuplicateScope>,
}

impl ReportOptions {
    /// Ordered column schema for this shape
    pub fn columns(&self, t: &dyn Translator) -> Vec<ColumnDef> {
        let mut columns = Vec::with_capacity(9);

        if self.include_image {
            columns.push(ColumnDef::data(t.translate("Image"), "image", 100));
        }
        columns.push(ColumnDef::link(t.translate("Item"), "item_code", "Item", 120));
        columns.push(ColumnDef::link(
            t.translate("Warehouse"),
            "warehouse",
            "Warehouse",
            120,
        ));

        if self.supplier_join {
            columns.push(ColumnDef::link(
                t.translate("Supplier"),
                "supplier",
                "Supplier",
                120,
            ));
            columns.extend([
                ColumnDef::float(t.translate("Available Qty"), "actual_qty", 150),
                ColumnDef::float(t.translate("Backorder Qty"), "projected_qty", 220).editable(),
                ColumnDef::float(t.translate("Required Qty"), "reserved_qty", 150),
                ColumnDef::float(t.translate("Requested Qty"), "indented_qty", 150),
                ColumnDef::float(t.translate("Receivable Qty"), "ordered_qty", 150),
            ]);
        } else {
            columns.extend([
                ColumnDef::float(t.translate("Actual"), "actual_qty", 90),
                ColumnDef::float(t.translate("Requested"), "indented_qty", 90),
                ColumnDef::float(t.translate("Reserved"), "reserved_qty", 90),
                ColumnDef::float(t.translate("Ordered"), "ordered_qty", 90),
                ColumnDef::float(t.translate("Projected"), "projected_qty", 90),
            ]);
        }

        columns
    }
}

/// Built-in report presets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ReportKind {
    /// Bins with a shortfall, no supplier information
    ItemsNeeded,
    /// Shortfalls per supplier with item images, duplicates per warehouse
    #[default]
    SupplyNeeds,
    /// Shortfalls per supplier, duplicates per item
    SupplyNeedsByItem,
}

impl ReportKind {
    pub const ALL: [ReportKind; 3] = [
        ReportKind::ItemsNeeded,
        ReportKind::SupplyNeeds,
        ReportKind::SupplyNeedsByItem,
    ];

    /// URL slug of the report
    pub fn slug(&self) -> &'static str {
        match self {
            ReportKind::ItemsNeeded => "items-needed",
            ReportKind::SupplyNeeds => "supply-needs",
            ReportKind::SupplyNeedsByItem => "supply-needs-by-item",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::ItemsNeeded => "Items Needed",
            ReportKind::SupplyNeeds => "Supply Needs",
            ReportKind::SupplyNeedsByItem => "Supply Needs by Item",
        }
    }

    pub fn options(&self) -> ReportOptions {
        match self {
            ReportKind::ItemsNeeded => ReportOptions {
                supplier_join: false,
                include_image: false,
                duplicate_scope: None,
            },
            ReportKind::SupplyNeeds => ReportOptions {
                supplier_join: true,
                include_image: true,
                duplicate_scope: Some(DuplicateScope::ItemWarehouse),
            },
            ReportKind::SupplyNeedsByItem => ReportOptions {
                supplier_join: true,
                include_image: false,
                duplicate_scope: Some(DuplicateScope::Item),
            },
        }
    }
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Requested report does not exist
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown report: {0}")]
pub struct UnknownReportKind(pub String);

impl FromStr for ReportKind {
    type Err = UnknownReportKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportKind::ALL
            .into_iter()
            .find(|kind| kind.slug() == s)
            .ok_or_else(|| UnknownReportKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::IdentityTranslator;

    fn fieldnames(kind: ReportKind) -> Vec<String> {
        kind.options()
            .columns(&IdentityTranslator)
            .into_iter()
            .map(|c| c.fieldname)
            .collect()
    }

    #[test]
    fn test_supply_needs_columns() {
        assert_eq!(
            fieldnames(ReportKind::SupplyNeeds),
            [
                "image",
                "item_code",
                "warehouse",
                "supplier",
                "actual_qty",
                "projected_qty",
                "reserved_qty",
                "indented_qty",
                "ordered_qty",
            ]
        );
    }

    #[test]
    fn test_items_needed_columns() {
        assert_eq!(
            fieldnames(ReportKind::ItemsNeeded),
            [
                "item_code",
                "warehouse",
                "actual_qty",
                "indented_qty",
                "reserved_qty",
                "ordered_qty",
                "projected_qty",
            ]
        );
    }

    #[test]
    fn test_by_item_columns_have_no_image() {
        let names = fieldnames(ReportKind::SupplyNeedsByItem);
        assert_eq!(names.len(), 8);
        assert_eq!(names[0], "item_code");
        assert!(names.contains(&"supplier".to_string()));
    }

    #[test]
    fn test_projected_qty_editable_only_with_suppliers() {
        let supply = ReportKind::SupplyNeeds.options().columns(&IdentityTranslator);
        let projected = supply.iter().find(|c| c.fieldname == "projected_qty").unwrap();
        assert!(projected.editable);
        assert_eq!(projected.label, "Backorder Qty");

        let base = ReportKind::ItemsNeeded.options().columns(&IdentityTranslator);
        assert!(base.iter().all(|c| !c.editable));
    }

    #[test]
    fn test_kind_slug_round_trip() {
        for kind in ReportKind::ALL {
            assert_eq!(kind.slug().parse::<ReportKind>(), Ok(kind));
        }
        assert!("stock-ledger".parse::<ReportKind>().is_err());
    }

    #[test]
    fn test_kind_serde_matches_slug() {
        for kind in ReportKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.slug()));
        }
    }

    #[test]
    fn test_labels_are_translated() {
        struct Upper;
        impl Translator for Upper {
            fn translate(&self, text: &str) -> String {
                text.to_uppercase()
            }
        }

        let columns = ReportKind::SupplyNeeds.options().columns(&Upper);
        assert_eq!(columns[1].label, "ITEM");
        assert_eq!(columns[1].options.as_deref(), Some("Item"));
    }
}
