//! Reporting handlers for shortfall reports, exports and order drafts

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use shared::{
    build_order_draft, OrderDraft, OrderKind, ReportDescriptor, ReportFilter, ReportKind,
    SelectedRow,
};

use crate::error::{AppError, AppResult};
use crate::middleware::{CurrentUser, REPORTS_READ};
use crate::services::ReportService;
use crate::AppState;

#[derive(Deserialize)]
pub struct ReportQuery {
    pub item_code: Option<String>,
    pub warehouse: Option<String>,
    pub supplier: Option<String>,
    pub format: Option<String>, // "json" or "csv"
}

impl ReportQuery {
    fn filter(&self) -> ReportFilter {
        ReportFilter {
            item_code: self.item_code.clone(),
            warehouse: self.warehouse.clone(),
            supplier: self.supplier.clone(),
        }
    }
}

#[derive(Deserialize)]
pub struct OrderDraftRequest {
    pub kind: OrderKind,
    #[serde(default)]
    pub rows: Vec<SelectedRow>,
    /// Drafting date, today when absent
    pub date: Option<NaiveDate>,
}

/// List the available reports
pub async fn list_reports(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<Vec<ReportDescriptor>>> {
    current_user.0.require(REPORTS_READ)?;
    Ok(Json(state.reports.describe_reports()))
}

/// Run a report as JSON or CSV
pub async fn run_report(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(kind): Path<String>,
    Query(query): Query<ReportQuery>,
) -> AppResult<Response> {
    current_user.0.require(REPORTS_READ)?;

    let kind = resolve_kind(&kind, state.config.reports.default_kind)?;
    let output = state.reports.run_kind(kind, &query.filter()).await?;

    if let Some(notice) = &output.notice {
        state.notices.show_message(notice);
    }

    if query.format.as_deref() == Some("csv") {
        let csv = ReportService::export_to_csv(&output)?;
        let disposition = format!("attachment; filename=\"{}.csv\"", kind.slug().replace('-', "_"));
        Ok((
            [
                (header::CONTENT_TYPE, "text/csv".to_string()),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            csv,
        )
            .into_response())
    } else {
        Ok(Json(output).into_response())
    }
}

/// Draft a material request or purchase order from selected rows
pub async fn create_order_draft(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<OrderDraftRequest>,
) -> AppResult<Json<OrderDraft>> {
    current_user.0.require(REPORTS_READ)?;

    let today = input.date.unwrap_or_else(|| Utc::now().date_naive());
    let draft = build_order_draft(
        input.kind,
        &input.rows,
        today,
        state.config.reports.order_lead_days,
    )?;

    tracing::info!(kind = %input.kind, lines = draft.items.len(), "Order draft built");
    Ok(Json(draft))
}

/// `default` names the configured default report
fn resolve_kind(slug: &str, default_kind: ReportKind) -> AppResult<ReportKind> {
    if slug == "default" {
        return Ok(default_kind);
    }
    slug.parse::<ReportKind>()
        .map_err(|_| AppError::NotFound(format!("Report '{}'", slug)))
}
