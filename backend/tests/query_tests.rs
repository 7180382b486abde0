//! SQL generation tests for the Postgres shortfall source

use replenishment_backend::{
    config::TablesConfig,
    store::{postgres::build_shortfall_query, ShortfallQuery},
};
use shared::{ReportFilter, ReportKind};

fn sql_for(kind: ReportKind, filter: &ReportFilter) -> String {
    let query = ShortfallQuery::new(&kind.options(), filter);
    build_shortfall_query(&TablesConfig::default(), &query)
        .sql()
        .to_string()
}

#[test]
fn test_supply_needs_joins_suppliers_and_selects_image() {
    let sql = sql_for(ReportKind::SupplyNeeds, &ReportFilter::default());

    assert!(sql.starts_with("SELECT item.image AS image, bin.item_code, bin.warehouse, item_supplier.supplier AS supplier"));
    assert!(sql.contains("FROM \"bin\" AS bin INNER JOIN \"item\" AS item ON bin.item_code = item.name"));
    assert!(sql.contains(" LEFT JOIN \"item_supplier\" AS item_supplier ON item.name = item_supplier.parent"));
    assert!(sql.contains(" WHERE bin.projected_qty < 0"));
    assert!(sql.ends_with("item_supplier.supplier COLLATE \"C\" ASC NULLS FIRST"));
}

#[test]
fn test_items_needed_has_no_supplier_join() {
    let sql = sql_for(ReportKind::ItemsNeeded, &ReportFilter::default());

    assert!(sql.starts_with("SELECT NULL::text AS image"));
    assert!(sql.contains("NULL::text AS supplier"));
    assert!(!sql.contains("LEFT JOIN"));
    assert!(!sql.contains("item_supplier.supplier"));
}

#[test]
fn test_filters_become_bind_parameters() {
    let filter = ReportFilter::default()
        .with_item_code("ITM1")
        .with_warehouse("WH1")
        .with_supplier("S1");
    let sql = sql_for(ReportKind::SupplyNeeds, &filter);

    assert!(sql.contains(" AND bin.item_code = $1"));
    assert!(sql.contains(" AND bin.warehouse = $2"));
    assert!(sql.contains(" AND item_supplier.supplier = $3"));
    assert!(!sql.contains("ITM1"));
}

#[test]
fn test_blank_filters_are_not_bound() {
    let filter = ReportFilter::default()
        .with_item_code("  ")
        .with_warehouse("WH1");
    let sql = sql_for(ReportKind::SupplyNeeds, &filter);

    assert!(!sql.contains("bin.item_code = $"));
    assert!(sql.contains(" AND bin.warehouse = $1"));
}

#[test]
fn test_supplier_filter_dropped_without_join() {
    let filter = ReportFilter::default().with_supplier("S1");
    let sql = sql_for(ReportKind::ItemsNeeded, &filter);

    assert!(!sql.contains("$1"));
}

#[test]
fn test_configured_table_names_are_quoted() {
    let tables = TablesConfig {
        bin: "tabBin".to_string(),
        item: "tabItem".to_string(),
        item_supplier: "tabItem Supplier".to_string(),
    };
    let query = ShortfallQuery::new(&ReportKind::SupplyNeeds.options(), &ReportFilter::default());
    let builder = build_shortfall_query(&tables, &query);
    let sql = builder.sql();

    assert!(sql.contains("FROM \"tabBin\" AS bin"));
    assert!(sql.contains("INNER JOIN \"tabItem\" AS item"));
    assert!(sql.contains("LEFT JOIN \"tabItem Supplier\" AS item_supplier"));
}
