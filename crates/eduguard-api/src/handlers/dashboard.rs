use crate::state::AppState;
use axum::{extract::State, Json};
use eduguard_core::models::DashboardRecord;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/dashboard",
    tag = "dashboard",
    responses(
        (status = 200, description = "Student performance records", body = Vec<DashboardRecord>)
    )
)]
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<Vec<DashboardRecord>> {
    Json(state.dashboard.records().await)
}
