use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;

use karyakarta_types::api::{EventPhotoPatch, NewEventPhoto};
use karyakarta_types::models::EventPhoto;

use crate::error::{ApiError, FoundExt};
use crate::filters::Filter;
use crate::state::AppState;
use crate::validation::validate;

#[derive(Debug, Default, Deserialize)]
pub struct PhotoQuery {
    pub q: Option<String>,
    pub event_id: Option<String>,
}

pub async fn list_photos(
    State(state): State<AppState>,
    Query(query): Query<PhotoQuery>,
) -> Json<Vec<EventPhoto>> {
    let store = &state.store;
    let mut photos = store.search_photos(query.q.as_deref().unwrap_or_default());

    Filter::<Uuid>::parse(query.event_id.as_deref())
        .narrow(&mut photos, |event_id| store.filter_photos_by_event(event_id));

    Json(photos)
}

pub async fn create_photo(
    State(state): State<AppState>,
    Json(req): Json<NewEventPhoto>,
) -> Result<impl IntoResponse, ApiError> {
    validate(&req)?;
    let photo = state.store.create_photo(req);
    Ok((StatusCode::CREATED, Json(photo)))
}

pub async fn get_photo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EventPhoto>, ApiError> {
    state.store.get_photo(id).or_not_found().map(Json)
}

pub async fn update_photo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<EventPhotoPatch>,
) -> Result<Json<EventPhoto>, ApiError> {
    validate(&patch)?;
    state.store.update_photo(id, patch).or_not_found().map(Json)
}

pub async fn delete_photo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.store.delete_photo(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}
