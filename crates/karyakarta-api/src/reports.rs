use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;

use karyakarta_types::api::{NewReport, ReportPatch};
use karyakarta_types::models::{Report, ReportCategory};

use crate::error::{ApiError, FoundExt};
use crate::filters::{Filter, narrow_flag};
use crate::state::AppState;
use crate::validation::validate;

#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub department: Option<String>,
    pub public: Option<String>,
}

pub async fn list_reports(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Json<Vec<Report>> {
    let store = &state.store;
    let mut reports = store.search_reports(query.q.as_deref().unwrap_or_default());

    Filter::<ReportCategory>::parse(query.category.as_deref())
        .narrow(&mut reports, |category| store.filter_reports_by_category(category));
    Filter::<String>::parse(query.department.as_deref())
        .narrow(&mut reports, |department| store.filter_reports_by_department(&department));
    narrow_flag(&mut reports, Filter::parse(query.public.as_deref()), || {
        store.public_reports()
    });

    Json(reports)
}

pub async fn create_report(
    State(state): State<AppState>,
    Json(req): Json<NewReport>,
) -> Result<impl IntoResponse, ApiError> {
    validate(&req)?;
    let report = state.store.create_report(req);
    Ok((StatusCode::CREATED, Json(report)))
}

pub async fn get_report(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Report>, ApiError> {
    state.store.get_report(id).or_not_found().map(Json)
}

pub async fn update_report(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<ReportPatch>,
) -> Result<Json<Report>, ApiError> {
    validate(&patch)?;
    state.store.update_report(id, patch).or_not_found().map(Json)
}

pub async fn delete_report(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.store.delete_report(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

/// Counts one download of the report file.
pub async fn record_download(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Report>, ApiError> {
    state
        .store
        .increment_report_downloads(id)
        .or_not_found()
        .map(Json)
}
