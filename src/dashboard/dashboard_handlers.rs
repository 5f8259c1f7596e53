use axum::{extract::State, Json};

use super::dashboard_service::{summarize, DashboardSummary};
use crate::state::AppState;

/// Headline figures for the dashboard
#[utoipa::path(
    get,
    path = "/api/dashboard",
    responses((status = 200, description = "Dashboard summary", body = DashboardSummary)),
    tag = "dashboard"
)]
pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardSummary> {
    let data = state.store.read().await;
    Json(summarize(&data))
}
