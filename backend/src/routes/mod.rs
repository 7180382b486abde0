//! Route definitions for the Replenishment Reports platform

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{handlers, middleware::auth_middleware, AppState};

/// Create API routes
pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Protected routes - reports
        .nest("/reports", report_routes(state))
}

/// Report routes (protected)
fn report_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_reports))
        .route("/order-drafts", post(handlers::create_order_draft))
        .route("/:kind", get(handlers::run_report))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
