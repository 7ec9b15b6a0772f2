use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::warn;
use uuid::Uuid;

use karyakarta_types::api::{
    AttendeeStatusRequest, EventPatch, EventStatusRequest, NewEvent, RegisterAttendeeRequest,
};
use karyakarta_types::models::{Event, EventAttendee, EventStatus, EventType};

use crate::error::{ApiError, FoundExt};
use crate::filters::{Filter, narrow_flag};
use crate::state::AppState;
use crate::validation::validate;

#[derive(Debug, Default, Deserialize)]
pub struct EventQuery {
    pub q: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    pub category: Option<String>,
    pub upcoming: Option<String>,
}

pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<EventQuery>,
) -> Json<Vec<Event>> {
    let store = &state.store;
    let mut events = store.search_events(query.q.as_deref().unwrap_or_default());

    Filter::<EventStatus>::parse(query.status.as_deref())
        .narrow(&mut events, |status| store.filter_events_by_status(status));
    Filter::<EventType>::parse(query.event_type.as_deref())
        .narrow(&mut events, |kind| store.filter_events_by_type(kind));
    Filter::<String>::parse(query.category.as_deref())
        .narrow(&mut events, |category| store.filter_events_by_category(&category));
    narrow_flag(&mut events, Filter::parse(query.upcoming.as_deref()), || {
        store.upcoming_events(store.now())
    });

    Json(events)
}

pub async fn create_event(
    State(state): State<AppState>,
    Json(req): Json<NewEvent>,
) -> Result<impl IntoResponse, ApiError> {
    validate(&req)?;
    let event = state.store.create_event(req);
    Ok((StatusCode::CREATED, Json(event)))
}

pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Event>, ApiError> {
    state.store.get_event(id).or_not_found().map(Json)
}

pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<EventPatch>,
) -> Result<Json<Event>, ApiError> {
    validate(&patch)?;
    let event = state
        .store
        .update_event(id, patch)
        .inspect_err(|e| warn!(event_id = %id, error = %e, "Event update refused"))?;
    Ok(Json(event))
}

pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.store.delete_event(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<EventStatusRequest>,
) -> Result<Json<Event>, ApiError> {
    state
        .store
        .update_event_status(id, req.status)
        .or_not_found()
        .map(Json)
}

// -- Attendees --

pub async fn register_attendee(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
    Json(req): Json<RegisterAttendeeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let attendee = state
        .store
        .register_attendee(event_id, req.member_id)
        .inspect_err(|e| warn!(error = %e, "Attendee registration refused"))?;
    Ok((StatusCode::CREATED, Json(attendee)))
}

pub async fn update_attendee(
    State(state): State<AppState>,
    Path((event_id, attendee_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<AttendeeStatusRequest>,
) -> Result<Json<EventAttendee>, ApiError> {
    state
        .store
        .update_attendee_status(event_id, attendee_id, req.status)
        .or_not_found()
        .map(Json)
}

pub async fn remove_attendee(
    State(state): State<AppState>,
    Path((event_id, attendee_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    if state.store.remove_attendee(event_id, attendee_id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}
