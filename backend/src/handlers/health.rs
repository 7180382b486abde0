//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::store::postgres::quote_ident;
use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub database: &'static str,
    /// All configured stock tables resolve in the database
    pub stock_tables: bool,
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let tables = &state.config.database.tables;

    let probe = sqlx::query_scalar::<_, bool>(
        "SELECT to_regclass($1) IS NOT NULL AND to_regclass($2) IS NOT NULL \
         AND to_regclass($3) IS NOT NULL",
    )
    .bind(quote_ident(&tables.bin))
    .bind(quote_ident(&tables.item))
    .bind(quote_ident(&tables.item_supplier))
    .fetch_one(&state.db)
    .await;

    let (database, stock_tables) = match probe {
        Ok(found) => {
            if !found {
                tracing::warn!(?tables, "Stock tables missing from the reporting database");
            }
            ("connected", found)
        }
        Err(e) => {
            tracing::warn!("Health check could not reach the database: {}", e);
            ("disconnected", false)
        }
    };

    Json(HealthResponse {
        status: if stock_tables { "healthy" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        database,
        stock_tables,
    })
}
