//! Detection of items sourced from more than one supplier

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{DuplicateScope, ReportRow};
use crate::types::{Severity, Translator};

/// Placeholder for rows without a supplier
pub const UNKNOWN_SUPPLIER: &str = "Unknown Supplier";

/// Placeholder for rows without a warehouse
pub const UNKNOWN_WAREHOUSE: &str = "Unknown Warehouse";

/// Item (optionally per warehouse) with more than one distinct supplier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DuplicateGroup {
    pub item_code: String,
    /// Set only for the item + warehouse scope
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warehouse: Option<String>,
    /// Distinct suppliers in first-seen order
    pub suppliers: Vec<String>,
}

impl DuplicateGroup {
    /// One notice line, e.g. `ITM1 (Warehouse: WH1) => S1, S2`
    pub fn describe(&self) -> String {
        match &self.warehouse {
            Some(warehouse) => format!(
                "{} (Warehouse: {}) => {}",
                self.item_code,
                warehouse,
                self.suppliers.join(", ")
            ),
            None => format!("{} => {}", self.item_code, self.suppliers.join(", ")),
        }
    }
}

/// Group rows by item (and warehouse) and keep the groups sourced from more
/// than one supplier. Groups come back in first-seen order.
pub fn find_duplicates<'a, I>(rows: I, scope: DuplicateScope) -> Vec<DuplicateGroup>
where
    I: IntoIterator<Item = &'a ReportRow>,
{
    let mut groups: Vec<DuplicateGroup> = Vec::new();
    let mut index: HashMap<(String, Option<String>), usize> = HashMap::new();

    for row in rows {
        if row.item_code.is_empty() {
            continue;
        }

        let warehouse = match scope {
            DuplicateScope::ItemWarehouse => Some(
                row.warehouse
                    .as_deref()
                    .filter(|w| !w.is_empty())
                    .unwrap_or(UNKNOWN_WAREHOUSE)
                    .to_string(),
            ),
            DuplicateScope::Item => None,
        };
        let supplier = row
            .supplier
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(UNKNOWN_SUPPLIER);

        let key = (row.item_code.clone(), warehouse);
        let slot = *index.entry(key.clone()).or_insert_with(|| {
            groups.push(DuplicateGroup {
                item_code: key.0,
                warehouse: key.1,
                suppliers: Vec::new(),
            });
            groups.len() - 1
        });

        let suppliers = &mut groups[slot].suppliers;
        if !suppliers.iter().any(|s| s == supplier) {
            suppliers.push(supplier.to_string());
        }
    }

    groups.retain(|g| g.suppliers.len() > 1);
    groups
}

/// Advisory message shown to the person running a report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub intro: String,
    pub lines: Vec<String>,
    pub severity: Severity,
}

impl Notice {
    /// Notice listing the duplicate supplier groups, `None` when there are none
    pub fn duplicate_suppliers(
        groups: &[DuplicateGroup],
        scope: DuplicateScope,
        t: &dyn Translator,
    ) -> Option<Self> {
        if groups.is_empty() {
            return None;
        }

        let intro = match scope {
            DuplicateScope::ItemWarehouse => {
                "The following item codes have multiple suppliers in the same warehouse:"
            }
            DuplicateScope::Item => "The following item codes have multiple suppliers:",
        };

        Some(Self {
            title: t.translate("Duplicate Item Codes"),
            intro: t.translate(intro),
            lines: groups.iter().map(DuplicateGroup::describe).collect(),
            severity: Severity::Warning,
        })
    }

    /// Intro followed by one line per entry
    pub fn body(&self) -> String {
        let mut body = self.intro.clone();
        for line in &self.lines {
            body.push('\n');
            body.push_str(line);
        }
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::IdentityTranslator;
    use rust_decimal::Decimal;

    fn row(item: &str, warehouse: Option<&str>, supplier: Option<&str>) -> ReportRow {
        ReportRow {
            image: None,
            item_code: item.to_string(),
            warehouse: warehouse.map(str::to_string),
            supplier: supplier.map(str::to_string),
            actual_qty: Decimal::ZERO,
            projected_qty: Decimal::new(-5, 0),
            reserved_qty: Decimal::ZERO,
            indented_qty: Decimal::ZERO,
            ordered_qty: Decimal::ZERO,
        }
    }

    #[test]
    fn test_two_suppliers_same_warehouse() {
        let rows = vec![
            row("ITM1", Some("WH1"), Some("S1")),
            row("ITM1", Some("WH1"), Some("S2")),
        ];
        let groups = find_duplicates(&rows, DuplicateScope::ItemWarehouse);
        assert_eq!(
            groups,
            vec![DuplicateGroup {
                item_code: "ITM1".to_string(),
                warehouse: Some("WH1".to_string()),
                suppliers: vec!["S1".to_string(), "S2".to_string()],
            }]
        );
        assert_eq!(groups[0].describe(), "ITM1 (Warehouse: WH1) => S1, S2");
    }

    #[test]
    fn test_single_supplier_is_not_duplicate() {
        let rows = vec![row("ITM1", Some("WH1"), Some("S1"))];
        assert!(find_duplicates(&rows, DuplicateScope::ItemWarehouse).is_empty());
        assert!(find_duplicates(&rows, DuplicateScope::Item).is_empty());
    }

    #[test]
    fn test_same_supplier_in_two_warehouses() {
        let rows = vec![
            row("ITM1", Some("WH1"), Some("S1")),
            row("ITM1", Some("WH2"), Some("S1")),
        ];
        assert!(find_duplicates(&rows, DuplicateScope::ItemWarehouse).is_empty());
        // distinct suppliers only, so still a single supplier per item
        assert!(find_duplicates(&rows, DuplicateScope::Item).is_empty());
    }

    #[test]
    fn test_item_scope_ignores_warehouse() {
        let rows = vec![
            row("ITM1", Some("WH1"), Some("S1")),
            row("ITM1", Some("WH2"), Some("S2")),
        ];
        assert!(find_duplicates(&rows, DuplicateScope::ItemWarehouse).is_empty());

        let groups = find_duplicates(&rows, DuplicateScope::Item);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].warehouse, None);
        assert_eq!(groups[0].describe(), "ITM1 => S1, S2");
    }

    #[test]
    fn test_missing_values_use_placeholders() {
        let rows = vec![
            row("ITM1", None, None),
            row("ITM1", None, Some("S1")),
        ];
        let groups = find_duplicates(&rows, DuplicateScope::ItemWarehouse);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].warehouse.as_deref(), Some(UNKNOWN_WAREHOUSE));
        assert_eq!(groups[0].suppliers, vec![UNKNOWN_SUPPLIER, "S1"]);
    }

    #[test]
    fn test_rows_without_item_code_skipped() {
        let rows = vec![row("", Some("WH1"), Some("S1")), row("", Some("WH1"), Some("S2"))];
        assert!(find_duplicates(&rows, DuplicateScope::ItemWarehouse).is_empty());
    }

    #[test]
    fn test_groups_in_first_seen_order() {
        let rows = vec![
            row("ITM2", Some("WH1"), Some("A")),
            row("ITM1", Some("WH1"), Some("B")),
            row("ITM2", Some("WH1"), Some("C")),
            row("ITM1", Some("WH1"), Some("D")),
        ];
        let groups = find_duplicates(&rows, DuplicateScope::ItemWarehouse);
        let items: Vec<_> = groups.iter().map(|g| g.item_code.as_str()).collect();
        assert_eq!(items, ["ITM2", "ITM1"]);
    }

    #[test]
    fn test_notice_for_duplicates() {
        let rows = vec![
            row("ITM1", Some("WH1"), Some("S1")),
            row("ITM1", Some("WH1"), Some("S2")),
        ];
        let groups = find_duplicates(&rows, DuplicateScope::ItemWarehouse);
        let notice =
            Notice::duplicate_suppliers(&groups, DuplicateScope::ItemWarehouse, &IdentityTranslator)
                .unwrap();

        assert_eq!(notice.title, "Duplicate Item Codes");
        assert_eq!(notice.severity, Severity::Warning);
        assert_eq!(
            notice.body(),
            "The following item codes have multiple suppliers in the same warehouse:\n\
             ITM1 (Warehouse: WH1) => S1, S2"
        );
    }

    #[test]
    fn test_no_notice_without_duplicates() {
        assert!(Notice::duplicate_suppliers(&[], DuplicateScope::Item, &IdentityTranslator).is_none());
    }
}
