use crate::{
    AppState,
    dtos::teacher::{TeacherRequest, TeacherResponse},
    error::{ApiError, ApiResult},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::services::teacher::TeacherService;

/// List all teachers
#[utoipa::path(
    get,
    path = "/teachers",
    responses(
        (status = 200, description = "Teachers in id order", body = Vec<TeacherResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Teachers"
)]
pub async fn list_teachers(State(state): State<AppState>) -> ApiResult<Json<Vec<TeacherResponse>>> {
    let teachers = TeacherService::list(&state.db).await?;
    Ok(Json(teachers.into_iter().map(TeacherResponse::from).collect()))
}

/// Get a teacher by ID
#[utoipa::path(
    get,
    path = "/teachers/{id}",
    params(("id" = i32, Path, description = "Teacher ID")),
    responses(
        (status = 200, description = "Teacher found", body = TeacherResponse),
        (status = 404, description = "Teacher not found")
    ),
    tag = "Teachers"
)]
pub async fn get_teacher(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<TeacherResponse>> {
    TeacherService::get(&state.db, id)
        .await?
        .map(|teacher| Json(teacher.into()))
        .ok_or_else(|| ApiError::not_found(format!("teacher {id} not found")))
}

/// Create a teacher
#[utoipa::path(
    post,
    path = "/teachers",
    request_body = TeacherRequest,
    responses(
        (status = 201, description = "Teacher created", body = TeacherResponse),
        (status = 400, description = "Invalid request body")
    ),
    tag = "Teachers"
)]
pub async fn create_teacher(
    State(state): State<AppState>,
    Json(request): Json<TeacherRequest>,
) -> ApiResult<(StatusCode, Json<TeacherResponse>)> {
    let teacher = TeacherService::create(&state.db, request.first_name, request.last_name).await?;
    Ok((StatusCode::CREATED, Json(teacher.into())))
}

/// Replace a teacher's names
#[utoipa::path(
    put,
    path = "/teachers/{id}",
    params(("id" = i32, Path, description = "Teacher ID")),
    request_body = TeacherRequest,
    responses(
        (status = 200, description = "Teacher updated", body = TeacherResponse),
        (status = 404, description = "Teacher not found")
    ),
    tag = "Teachers"
)]
pub async fn update_teacher(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<TeacherRequest>,
) -> ApiResult<Json<TeacherResponse>> {
    let teacher =
        TeacherService::update(&state.db, id, request.first_name, request.last_name).await?;
    Ok(Json(teacher.into()))
}

/// Delete a teacher, their subjects and every lesson referencing either
#[utoipa::path(
    delete,
    path = "/teachers/{id}",
    params(("id" = i32, Path, description = "Teacher ID")),
    responses(
        (status = 204, description = "Teacher deleted"),
        (status = 404, description = "Teacher not found")
    ),
    tag = "Teachers"
)]
pub async fn delete_teacher(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    if TeacherService::delete(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found(format!("teacher {id} not found")))
    }
}
