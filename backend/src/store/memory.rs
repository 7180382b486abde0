//! In-memory shortfall source
//!
//! Holds the three stock relations in memory and evaluates read plans with
//! the same semantics as the SQL source. Used for fixtures and tests.

use async_trait::async_trait;
use shared::{BinRecord, ItemRecord, ItemSupplierRecord};

use super::{ShortfallQuery, ShortfallRecord, ShortfallSource};
use crate::error::AppResult;

#[derive(Debug, Clone, Default)]
pub struct MemoryShortfallSource {
    bins: Vec<BinRecord>,
    items: Vec<ItemRecord>,
    item_suppliers: Vec<ItemSupplierRecord>,
}

impl MemoryShortfallSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bin(mut self, bin: BinRecord) -> Self {
        self.bins.push(bin);
        self
    }

    pub fn with_item(mut self, name: &str, image: Option<&str>) -> Self {
        self.items.push(ItemRecord {
            name: name.to_string(),
            image: image.map(str::to_string),
        });
        self
    }

    pub fn with_supplier(mut self, item_code: &str, supplier: &str) -> Self {
        self.item_suppliers.push(ItemSupplierRecord {
            parent: item_code.to_string(),
            supplier: supplier.to_string(),
        });
        self
    }

    /// Evaluate a plan over the loaded relations
    pub fn evaluate(&self, query: &ShortfallQuery) -> Vec<ShortfallRecord> {
        let mut records = Vec::new();

        for bin in self.bins.iter().filter(|b| b.is_shortfall()) {
            if query.item_code.as_deref().is_some_and(|c| c != bin.item_code) {
                continue;
            }
            if query
                .warehouse
                .as_deref()
                .is_some_and(|w| bin.warehouse.as_deref() != Some(w))
            {
                continue;
            }

            // inner join on the item master
            let Some(item) = self.items.iter().find(|i| i.name == bin.item_code) else {
                continue;
            };

            let image = if query.include_image {
                item.image.clone()
            } else {
                None
            };

            let suppliers: Vec<Option<&str>> = if query.supplier_join {
                let found: Vec<Option<&str>> = self
                    .item_suppliers
                    .iter()
                    .filter(|s| s.parent == item.name)
                    .map(|s| Some(s.supplier.as_str()))
                    .collect();
                // left join keeps the bin when the item has no supplier
                if found.is_empty() {
                    vec![None]
                } else {
                    found
                }
            } else {
                vec![None]
            };

            for supplier in suppliers {
                if query.supplier_join
                    && query.supplier.as_deref().is_some_and(|s| supplier != Some(s))
                {
                    continue;
                }
                records.push(ShortfallRecord {
                    image: image.clone(),
                    item_code: bin.item_code.clone(),
                    warehouse: bin.warehouse.clone(),
                    supplier: supplier.map(str::to_string),
                    actual_qty: bin.actual_qty,
                    indented_qty: bin.indented_qty,
                    reserved_qty: bin.reserved_qty,
                    ordered_qty: bin.ordered_qty,
                    projected_qty: bin.projected_qty,
                });
            }
        }

        records.sort_by(|a, b| {
            a.projected_qty
                .cmp(&b.projected_qty)
                .then_with(|| a.item_code.cmp(&b.item_code))
                .then_with(|| a.warehouse.cmp(&b.warehouse))
                .then_with(|| a.supplier.cmp(&b.supplier))
        });
        records
    }
}

#[async_trait]
impl ShortfallSource for MemoryShortfallSource {
    async fn fetch_shortfalls(&self, query: &ShortfallQuery) -> AppResult<Vec<ShortfallRecord>> {
        Ok(self.evaluate(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::{ReportFilter, ReportKind};

    fn plan(kind: ReportKind, filter: ReportFilter) -> ShortfallQuery {
        ShortfallQuery::new(&kind.options(), &filter)
    }

    #[test]
    fn test_bin_without_item_is_dropped() {
        let source = MemoryShortfallSource::new()
            .with_bin(BinRecord::shortfall("ITM1", "WH1", Decimal::new(-5, 0)));
        assert!(source
            .evaluate(&plan(ReportKind::SupplyNeeds, ReportFilter::default()))
            .is_empty());
    }

    #[test]
    fn test_non_negative_bins_are_dropped() {
        let source = MemoryShortfallSource::new()
            .with_item("ITM1", None)
            .with_bin(BinRecord::shortfall("ITM1", "WH1", Decimal::ZERO))
            .with_bin(BinRecord::shortfall("ITM1", "WH2", Decimal::new(3, 0)));
        assert!(source
            .evaluate(&plan(ReportKind::ItemsNeeded, ReportFilter::default()))
            .is_empty());
    }

    #[test]
    fn test_items_needed_ignores_suppliers() {
        let source = MemoryShortfallSource::new()
            .with_item("ITM1", Some("/files/itm1.png"))
            .with_supplier("ITM1", "S1")
            .with_supplier("ITM1", "S2")
            .with_bin(BinRecord::shortfall("ITM1", "WH1", Decimal::new(-5, 0)));

        let records = source.evaluate(&plan(ReportKind::ItemsNeeded, ReportFilter::default()));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].supplier, None);
        assert_eq!(records[0].image, None);
    }

    #[test]
    fn test_fan_out_sorted_by_supplier() {
        let source = MemoryShortfallSource::new()
            .with_item("ITM1", None)
            .with_supplier("ITM1", "S2")
            .with_supplier("ITM1", "S1")
            .with_bin(BinRecord::shortfall("ITM1", "WH1", Decimal::new(-5, 0)));

        let records = source.evaluate(&plan(ReportKind::SupplyNeeds, ReportFilter::default()));
        let suppliers: Vec<_> = records.iter().map(|r| r.supplier.as_deref()).collect();
        assert_eq!(suppliers, [Some("S1"), Some("S2")]);
    }
}
