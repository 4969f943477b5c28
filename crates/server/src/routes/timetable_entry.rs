use crate::{
    AppState,
    dtos::timetable_entry::{
        TimetableEntryQueryParams, TimetableEntryRequest, TimetableEntryResponse,
    },
    error::{ApiError, ApiResult},
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use database::services::timetable_entry::TimetableEntryService;

/// List timetable entries, optionally by class and time slot day
#[utoipa::path(
    get,
    path = "/timetable-entries",
    params(TimetableEntryQueryParams),
    responses(
        (status = 200, description = "Entries in id order", body = Vec<TimetableEntryResponse>)
    ),
    tag = "Timetable entries"
)]
pub async fn list_entries(
    State(state): State<AppState>,
    Query(params): Query<TimetableEntryQueryParams>,
) -> ApiResult<Json<Vec<TimetableEntryResponse>>> {
    let entries = TimetableEntryService::list(&state.db, params.into()).await?;
    Ok(Json(
        entries
            .into_iter()
            .map(TimetableEntryResponse::from)
            .collect(),
    ))
}

/// Get a timetable entry by ID
#[utoipa::path(
    get,
    path = "/timetable-entries/{id}",
    params(("id" = i32, Path, description = "Timetable entry ID")),
    responses(
        (status = 200, description = "Entry found", body = TimetableEntryResponse),
        (status = 404, description = "Entry not found")
    ),
    tag = "Timetable entries"
)]
pub async fn get_entry(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<TimetableEntryResponse>> {
    TimetableEntryService::get(&state.db, id)
        .await?
        .map(|details| Json(details.into()))
        .ok_or_else(|| ApiError::not_found(format!("timetable entry {id} not found")))
}

/// Schedule a lesson
///
/// Overlapping entries for the same class and slot are accepted.
#[utoipa::path(
    post,
    path = "/timetable-entries",
    request_body = TimetableEntryRequest,
    responses(
        (status = 201, description = "Entry created", body = TimetableEntryResponse),
        (status = 400, description = "Unknown class, subject, time slot or teacher")
    ),
    tag = "Timetable entries"
)]
pub async fn create_entry(
    State(state): State<AppState>,
    Json(request): Json<TimetableEntryRequest>,
) -> ApiResult<(StatusCode, Json<TimetableEntryResponse>)> {
    let entry = TimetableEntryService::create(
        &state.db,
        request.school_class_id,
        request.subject_id,
        request.time_slot_id,
        request.teacher_id,
    )
    .await?;

    let response = fetch_response(&state, entry.id).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Update a timetable entry
#[utoipa::path(
    put,
    path = "/timetable-entries/{id}",
    params(("id" = i32, Path, description = "Timetable entry ID")),
    request_body = TimetableEntryRequest,
    responses(
        (status = 200, description = "Entry updated", body = TimetableEntryResponse),
        (status = 400, description = "Unknown class, subject, time slot or teacher"),
        (status = 404, description = "Entry not found")
    ),
    tag = "Timetable entries"
)]
pub async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<TimetableEntryRequest>,
) -> ApiResult<Json<TimetableEntryResponse>> {
    TimetableEntryService::update(
        &state.db,
        id,
        request.school_class_id,
        request.subject_id,
        request.time_slot_id,
        request.teacher_id,
    )
    .await?;

    Ok(Json(fetch_response(&state, id).await?))
}

/// Delete a timetable entry
#[utoipa::path(
    delete,
    path = "/timetable-entries/{id}",
    params(("id" = i32, Path, description = "Timetable entry ID")),
    responses(
        (status = 204, description = "Entry deleted"),
        (status = 404, description = "Entry not found")
    ),
    tag = "Timetable entries"
)]
pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    if TimetableEntryService::delete(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found(format!("timetable entry {id} not found")))
    }
}

async fn fetch_response(state: &AppState, id: i32) -> ApiResult<TimetableEntryResponse> {
    TimetableEntryService::get(&state.db, id)
        .await?
        .map(TimetableEntryResponse::from)
        .ok_or_else(|| ApiError::Internal(format!("timetable entry {id} vanished after write")))
}
