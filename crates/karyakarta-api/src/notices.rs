use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;

use karyakarta_types::api::{MarkReadRequest, NewNotice, NoticePatch};
use karyakarta_types::models::{Notice, NoticePriority, TargetAudience};

use crate::error::{ApiError, FoundExt};
use crate::filters::{Filter, narrow_flag};
use crate::state::AppState;
use crate::validation::validate;

#[derive(Debug, Default, Deserialize)]
pub struct NoticeQuery {
    pub q: Option<String>,
    pub priority: Option<String>,
    pub category: Option<String>,
    pub audience: Option<String>,
    pub active: Option<String>,
}

pub async fn list_notices(
    State(state): State<AppState>,
    Query(query): Query<NoticeQuery>,
) -> Json<Vec<Notice>> {
    let store = &state.store;
    let mut notices = store.search_notices(query.q.as_deref().unwrap_or_default());

    Filter::<NoticePriority>::parse(query.priority.as_deref())
        .narrow(&mut notices, |priority| store.filter_notices_by_priority(priority));
    Filter::<String>::parse(query.category.as_deref())
        .narrow(&mut notices, |category| store.filter_notices_by_category(&category));
    Filter::<TargetAudience>::parse(query.audience.as_deref())
        .narrow(&mut notices, |audience| store.filter_notices_by_audience(audience));
    narrow_flag(&mut notices, Filter::parse(query.active.as_deref()), || {
        store.active_notices(store.now())
    });

    Json(notices)
}

pub async fn create_notice(
    State(state): State<AppState>,
    Json(req): Json<NewNotice>,
) -> Result<impl IntoResponse, ApiError> {
    validate(&req)?;
    let notice = state.store.create_notice(req);
    Ok((StatusCode::CREATED, Json(notice)))
}

pub async fn get_notice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Notice>, ApiError> {
    state.store.get_notice(id).or_not_found().map(Json)
}

pub async fn update_notice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<NoticePatch>,
) -> Result<Json<Notice>, ApiError> {
    validate(&patch)?;
    state.store.update_notice(id, patch).or_not_found().map(Json)
}

pub async fn delete_notice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.store.delete_notice(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

pub async fn toggle_pin(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Notice>, ApiError> {
    state.store.toggle_notice_pin(id).or_not_found().map(Json)
}

pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<MarkReadRequest>,
) -> Result<Json<Notice>, ApiError> {
    validate(&req)?;
    state
        .store
        .mark_notice_read(id, &req.reader)
        .or_not_found()
        .map(Json)
}

pub async fn record_view(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Notice>, ApiError> {
    state.store.record_notice_view(id).or_not_found().map(Json)
}
