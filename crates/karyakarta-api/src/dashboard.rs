use axum::{Json, extract::State};

use karyakarta_types::api::HealthResponse;
use karyakarta_types::models::DashboardSummary;

use crate::state::AppState;

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn summary(State(state): State<AppState>) -> Json<DashboardSummary> {
    Json(state.store.dashboard())
}
