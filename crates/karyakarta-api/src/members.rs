use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;

use karyakarta_types::api::{MemberPatch, NewMember, VerificationRequest};
use karyakarta_types::models::Member;

use crate::error::{ApiError, FoundExt};
use crate::filters::{Filter, narrow_flag};
use crate::state::AppState;
use crate::validation::validate;

#[derive(Debug, Default, Deserialize)]
pub struct MemberQuery {
    pub q: Option<String>,
    pub district: Option<String>,
    pub constituency: Option<String>,
    pub verified: Option<String>,
}

pub async fn list_members(
    State(state): State<AppState>,
    Query(query): Query<MemberQuery>,
) -> Json<Vec<Member>> {
    let store = &state.store;
    let mut members = store.search_members(query.q.as_deref().unwrap_or_default());

    Filter::<String>::parse(query.district.as_deref())
        .narrow(&mut members, |d| store.filter_members_by_district(&d));
    Filter::<String>::parse(query.constituency.as_deref())
        .narrow(&mut members, |c| store.filter_members_by_constituency(&c));
    narrow_flag(&mut members, Filter::parse(query.verified.as_deref()), || {
        store.filter_members_by_verified(true)
    });

    Json(members)
}

pub async fn create_member(
    State(state): State<AppState>,
    Json(req): Json<NewMember>,
) -> Result<impl IntoResponse, ApiError> {
    validate(&req)?;
    let member = state.store.create_member(req);
    Ok((StatusCode::CREATED, Json(member)))
}

pub async fn get_member(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Member>, ApiError> {
    state.store.get_member(id).or_not_found().map(Json)
}

pub async fn update_member(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<MemberPatch>,
) -> Result<Json<Member>, ApiError> {
    validate(&patch)?;
    state.store.update_member(id, patch).or_not_found().map(Json)
}

pub async fn delete_member(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.store.delete_member(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

pub async fn set_verification(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<VerificationRequest>,
) -> Result<Json<Member>, ApiError> {
    state
        .store
        .set_member_verified(id, req.verified)
        .or_not_found()
        .map(Json)
}
