use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;

use karyakarta_types::api::{
    FeedbackPatch, FeedbackResponseRequest, FeedbackStatusRequest, NewFeedback,
};
use karyakarta_types::models::{Feedback, FeedbackCategory, FeedbackStatus};

use crate::error::{ApiError, FoundExt};
use crate::filters::Filter;
use crate::state::AppState;
use crate::validation::validate;

#[derive(Debug, Default, Deserialize)]
pub struct FeedbackQuery {
    pub q: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
}

pub async fn list_feedback(
    State(state): State<AppState>,
    Query(query): Query<FeedbackQuery>,
) -> Json<Vec<Feedback>> {
    let store = &state.store;
    let mut feedback = store.search_feedback(query.q.as_deref().unwrap_or_default());

    Filter::<FeedbackStatus>::parse(query.status.as_deref())
        .narrow(&mut feedback, |status| store.filter_feedback_by_status(status));
    Filter::<FeedbackCategory>::parse(query.category.as_deref())
        .narrow(&mut feedback, |category| store.filter_feedback_by_category(category));

    Json(feedback)
}

pub async fn create_feedback(
    State(state): State<AppState>,
    Json(req): Json<NewFeedback>,
) -> Result<impl IntoResponse, ApiError> {
    validate(&req)?;
    let feedback = state.store.create_feedback(req);
    Ok((StatusCode::CREATED, Json(feedback)))
}

pub async fn get_feedback(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Feedback>, ApiError> {
    state.store.get_feedback(id).or_not_found().map(Json)
}

pub async fn update_feedback(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<FeedbackPatch>,
) -> Result<Json<Feedback>, ApiError> {
    validate(&patch)?;
    state.store.update_feedback(id, patch).or_not_found().map(Json)
}

pub async fn delete_feedback(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.store.delete_feedback(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<FeedbackStatusRequest>,
) -> Result<Json<Feedback>, ApiError> {
    state
        .store
        .update_feedback_status(id, req.status)
        .or_not_found()
        .map(Json)
}

pub async fn respond(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<FeedbackResponseRequest>,
) -> Result<Json<Feedback>, ApiError> {
    validate(&req)?;
    state
        .store
        .respond_to_feedback(id, req.response)
        .or_not_found()
        .map(Json)
}
