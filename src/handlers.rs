use crate::errors::AppError;
use crate::export::{render_report, report_file_name};
use crate::models::{
    AnalyzeRequest, BulkAnalyzeRequest, DashboardStats, HistoryResponse, TabRequest, ViewMode,
    ViewSnapshot,
};
use crate::state::AppState;
use crate::stats::build_dashboard;
use crate::ui::render_index;
use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse, Response},
    Json,
};
use chrono::Utc;
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let snapshot = state.dashboard.snapshot().await;
    Html(render_index(&snapshot))
}

pub async fn get_state(State(state): State<AppState>) -> Json<ViewSnapshot> {
    Json(state.dashboard.snapshot().await)
}

pub async fn analyze(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> Json<ViewSnapshot> {
    Json(state.dashboard.submit_single(payload.review).await)
}

pub async fn analyze_bulk(
    State(state): State<AppState>,
    Json(payload): Json<BulkAnalyzeRequest>,
) -> Json<ViewSnapshot> {
    Json(state.dashboard.submit_bulk(payload.reviews).await)
}

pub async fn switch_tab(
    State(state): State<AppState>,
    Json(payload): Json<TabRequest>,
) -> Result<Json<ViewSnapshot>, AppError> {
    let mode: ViewMode = payload.tab.parse().map_err(AppError::bad_request)?;
    Ok(Json(state.dashboard.switch_tab(mode).await))
}

pub async fn get_history(State(state): State<AppState>) -> Json<HistoryResponse> {
    let log = state.dashboard.history().await;
    Json(HistoryResponse {
        count: log.len(),
        history: log.records().to_vec(),
    })
}

pub async fn get_stats(State(state): State<AppState>) -> Json<DashboardStats> {
    let log = state.dashboard.history().await;
    Json(build_dashboard(&log))
}

pub async fn export_report(State(state): State<AppState>) -> Result<Response, AppError> {
    let exported_at = Utc::now();
    let report = state.dashboard.export(exported_at).await;
    let body = render_report(&report)?;
    let file_name = report_file_name(exported_at);
    info!("exporting {} reviews as {file_name}", report.total_reviews);

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        body,
    )
        .into_response())
}
