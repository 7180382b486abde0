//! WebAssembly module for the Replenishment Reports client
//!
//! Provides client-side helpers for:
//! - Parsing locale-formatted quantities
//! - Cell rendering (image and projected quantity)
//! - Duplicate supplier checks on loaded rows
//! - Drafting material requests and purchase orders from selected rows

use chrono::NaiveDate;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::format;
pub use shared::models::*;
pub use shared::types::*;

/// Parse a displayed number using the user's number format, NaN when unparseable
#[wasm_bindgen]
pub fn parse_formatted_number(value: &str, number_format: &str) -> f64 {
    format::parse_formatted_number(value, number_format)
}

/// Wrap a formatted projected quantity in a red span when it is negative
#[wasm_bindgen]
pub fn highlight_projected(value_html: &str, projected_qty: f64) -> String {
    format::highlight_projected(value_html, projected_qty)
}

/// Thumbnail markup for an item image cell, empty without an image
#[wasm_bindgen]
pub fn render_image_cell(url: Option<String>) -> String {
    ItemImage::from_url(url.as_deref()).to_markup()
}

/// Duplicate supplier groups of the given rows as JSON.
///
/// `scope` is `item_warehouse` or `item`.
#[wasm_bindgen]
pub fn find_duplicate_suppliers(rows_json: &str, scope: &str) -> Result<String, JsValue> {
    duplicate_groups_json(rows_json, scope).map_err(to_js_error)
}

/// Duplicate supplier notice for the given rows as JSON, `null` when there is nothing to report
#[wasm_bindgen]
pub fn duplicate_notice(rows_json: &str, scope: &str) -> Result<String, JsValue> {
    duplicate_notice_json(rows_json, scope).map_err(to_js_error)
}

/// Draft an order from selected report rows.
///
/// `kind` is `material_request` or `purchase_order`; `today` is an ISO date
/// and defaults to the browser's current date.
#[wasm_bindgen]
pub fn build_order_draft(
    kind: &str,
    rows_json: &str,
    today: Option<String>,
    lead_days: u32,
) -> Result<String, JsValue> {
    let today = match today {
        Some(today) => today,
        None => browser_today(),
    };
    order_draft_json(kind, rows_json, &today, lead_days).map_err(to_js_error)
}

fn to_js_error(message: String) -> JsValue {
    web_sys::console::warn_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}

fn browser_today() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        now.get_full_year(),
        now.get_month() + 1,
        now.get_date()
    )
}

fn parse_scope(scope: &str) -> Result<DuplicateScope, String> {
    match scope {
        "item_warehouse" => Ok(DuplicateScope::ItemWarehouse),
        "item" => Ok(DuplicateScope::Item),
        other => Err(format!("Unknown duplicate scope: {}", other)),
    }
}

fn parse_rows(rows_json: &str) -> Result<Vec<ReportRow>, String> {
    serde_json::from_str(rows_json).map_err(|e| format!("Invalid rows JSON: {}", e))
}

fn duplicate_groups_json(rows_json: &str, scope: &str) -> Result<String, String> {
    let scope = parse_scope(scope)?;
    let rows = parse_rows(rows_json)?;
    let groups = find_duplicates(&rows, scope);
    serde_json::to_string(&groups).map_err(|e| e.to_string())
}

fn duplicate_notice_json(rows_json: &str, scope: &str) -> Result<String, String> {
    let scope = parse_scope(scope)?;
    let rows = parse_rows(rows_json)?;
    let groups = find_duplicates(&rows, scope);
    let notice = Notice::duplicate_suppliers(&groups, scope, &IdentityTranslator);
    serde_json::to_string(&notice).map_err(|e| e.to_string())
}

fn order_draft_json(
    kind: &str,
    rows_json: &str,
    today: &str,
    lead_days: u32,
) -> Result<String, String> {
    let kind = match kind {
        "material_request" => OrderKind::MaterialRequest,
        "purchase_order" => OrderKind::PurchaseOrder,
        other => return Err(format!("Unknown order kind: {}", other)),
    };
    let rows: Vec<SelectedRow> =
        serde_json::from_str(rows_json).map_err(|e| format!("Invalid rows JSON: {}", e))?;
    let today = NaiveDate::parse_from_str(today, "%Y-%m-%d")
        .map_err(|e| format!("Invalid date '{}': {}", today, e))?;

    let draft = shared::build_order_draft(kind, &rows, today, u64::from(lead_days))
        .map_err(|e| e.to_string())?;
    serde_json::to_string(&draft).map_err(|e| e.to_string())
}
