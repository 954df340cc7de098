use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/state", get(handlers::get_state))
        .route("/api/analyze", post(handlers::analyze))
        .route("/api/bulk", post(handlers::analyze_bulk))
        .route("/api/tab", post(handlers::switch_tab))
        .route("/api/history", get(handlers::get_history))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/export", get(handlers::export_report))
        .with_state(state)
}
