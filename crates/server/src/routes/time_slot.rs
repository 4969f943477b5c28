use crate::{
    AppState,
    dtos::time_slot::{TimeSlotQueryParams, TimeSlotRequest, TimeSlotResponse},
    error::{ApiError, ApiResult},
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use database::services::time_slot::TimeSlotService;

/// List time slots by start time, optionally for one day
#[utoipa::path(
    get,
    path = "/time-slots",
    params(TimeSlotQueryParams),
    responses(
        (status = 200, description = "Time slots ordered by start time", body = Vec<TimeSlotResponse>)
    ),
    tag = "Time slots"
)]
pub async fn list_time_slots(
    State(state): State<AppState>,
    Query(params): Query<TimeSlotQueryParams>,
) -> ApiResult<Json<Vec<TimeSlotResponse>>> {
    let slots = TimeSlotService::list(&state.db, params.day.as_deref()).await?;
    Ok(Json(slots.into_iter().map(TimeSlotResponse::from).collect()))
}

/// Get a time slot by ID
#[utoipa::path(
    get,
    path = "/time-slots/{id}",
    params(("id" = i32, Path, description = "Time slot ID")),
    responses(
        (status = 200, description = "Time slot found", body = TimeSlotResponse),
        (status = 404, description = "Time slot not found")
    ),
    tag = "Time slots"
)]
pub async fn get_time_slot(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<TimeSlotResponse>> {
    TimeSlotService::get(&state.db, id)
        .await?
        .map(|slot| Json(slot.into()))
        .ok_or_else(|| ApiError::not_found(format!("time slot {id} not found")))
}

/// Create a time slot
#[utoipa::path(
    post,
    path = "/time-slots",
    request_body = TimeSlotRequest,
    responses(
        (status = 201, description = "Time slot created", body = TimeSlotResponse),
        (status = 400, description = "Invalid request body")
    ),
    tag = "Time slots"
)]
pub async fn create_time_slot(
    State(state): State<AppState>,
    Json(request): Json<TimeSlotRequest>,
) -> ApiResult<(StatusCode, Json<TimeSlotResponse>)> {
    let slot = TimeSlotService::create(
        &state.db,
        &request.day,
        request.start_time,
        request.end_time,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(slot.into())))
}

/// Update a time slot
#[utoipa::path(
    put,
    path = "/time-slots/{id}",
    params(("id" = i32, Path, description = "Time slot ID")),
    request_body = TimeSlotRequest,
    responses(
        (status = 200, description = "Time slot updated", body = TimeSlotResponse),
        (status = 404, description = "Time slot not found")
    ),
    tag = "Time slots"
)]
pub async fn update_time_slot(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<TimeSlotRequest>,
) -> ApiResult<Json<TimeSlotResponse>> {
    let slot = TimeSlotService::update(
        &state.db,
        id,
        &request.day,
        request.start_time,
        request.end_time,
    )
    .await?;
    Ok(Json(slot.into()))
}

/// Delete a time slot and its lessons
#[utoipa::path(
    delete,
    path = "/time-slots/{id}",
    params(("id" = i32, Path, description = "Time slot ID")),
    responses(
        (status = 204, description = "Time slot deleted"),
        (status = 404, description = "Time slot not found")
    ),
    tag = "Time slots"
)]
pub async fn delete_time_slot(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    if TimeSlotService::delete(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found(format!("time slot {id} not found")))
    }
}
