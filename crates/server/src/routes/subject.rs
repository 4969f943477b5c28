use crate::{
    AppState,
    dtos::subject::{SubjectRequest, SubjectResponse},
    error::{ApiError, ApiResult},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::services::subject::SubjectService;

/// List all subjects with their teacher and classes
#[utoipa::path(
    get,
    path = "/subjects",
    responses(
        (status = 200, description = "Subjects in id order", body = Vec<SubjectResponse>)
    ),
    tag = "Subjects"
)]
pub async fn list_subjects(State(state): State<AppState>) -> ApiResult<Json<Vec<SubjectResponse>>> {
    let subjects = SubjectService::list(&state.db).await?;
    Ok(Json(subjects.into_iter().map(SubjectResponse::from).collect()))
}

/// Get a subject by ID
#[utoipa::path(
    get,
    path = "/subjects/{id}",
    params(("id" = i32, Path, description = "Subject ID")),
    responses(
        (status = 200, description = "Subject found", body = SubjectResponse),
        (status = 404, description = "Subject not found")
    ),
    tag = "Subjects"
)]
pub async fn get_subject(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<SubjectResponse>> {
    SubjectService::get(&state.db, id)
        .await?
        .map(|subject| Json(subject.into()))
        .ok_or_else(|| ApiError::not_found(format!("subject {id} not found")))
}

/// Create a subject taught to the given classes
#[utoipa::path(
    post,
    path = "/subjects",
    request_body = SubjectRequest,
    responses(
        (status = 201, description = "Subject created", body = SubjectResponse),
        (status = 400, description = "Unknown teacher or class")
    ),
    tag = "Subjects"
)]
pub async fn create_subject(
    State(state): State<AppState>,
    Json(request): Json<SubjectRequest>,
) -> ApiResult<(StatusCode, Json<SubjectResponse>)> {
    let subject = SubjectService::create(
        &state.db,
        request.name,
        request.teacher_id,
        request.class_ids,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(subject.into())))
}

/// Update a subject, replacing its class set
#[utoipa::path(
    put,
    path = "/subjects/{id}",
    params(("id" = i32, Path, description = "Subject ID")),
    request_body = SubjectRequest,
    responses(
        (status = 200, description = "Subject updated", body = SubjectResponse),
        (status = 400, description = "Unknown teacher or class"),
        (status = 404, description = "Subject not found")
    ),
    tag = "Subjects"
)]
pub async fn update_subject(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<SubjectRequest>,
) -> ApiResult<Json<SubjectResponse>> {
    let subject = SubjectService::update(
        &state.db,
        id,
        request.name,
        request.teacher_id,
        request.class_ids,
    )
    .await?;
    Ok(Json(subject.into()))
}

/// Delete a subject and its lessons
#[utoipa::path(
    delete,
    path = "/subjects/{id}",
    params(("id" = i32, Path, description = "Subject ID")),
    responses(
        (status = 204, description = "Subject deleted"),
        (status = 404, description = "Subject not found")
    ),
    tag = "Subjects"
)]
pub async fn delete_subject(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    if SubjectService::delete(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found(format!("subject {id} not found")))
    }
}
