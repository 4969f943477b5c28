use crate::{
    AppState,
    dtos::school_class::{SchoolClassRequest, SchoolClassResponse},
    error::{ApiError, ApiResult},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::services::school_class::SchoolClassService;

/// List all classes
#[utoipa::path(
    get,
    path = "/classes",
    responses(
        (status = 200, description = "Classes in id order", body = Vec<SchoolClassResponse>)
    ),
    tag = "Classes"
)]
pub async fn list_classes(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<SchoolClassResponse>>> {
    let classes = SchoolClassService::list(&state.db).await?;
    Ok(Json(classes.into_iter().map(SchoolClassResponse::from).collect()))
}

/// Get a class by ID
#[utoipa::path(
    get,
    path = "/classes/{id}",
    params(("id" = i32, Path, description = "Class ID")),
    responses(
        (status = 200, description = "Class found", body = SchoolClassResponse),
        (status = 404, description = "Class not found")
    ),
    tag = "Classes"
)]
pub async fn get_class(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<SchoolClassResponse>> {
    SchoolClassService::get(&state.db, id)
        .await?
        .map(|school_class| Json(school_class.into()))
        .ok_or_else(|| ApiError::not_found(format!("class {id} not found")))
}

/// Create a class
#[utoipa::path(
    post,
    path = "/classes",
    request_body = SchoolClassRequest,
    responses(
        (status = 201, description = "Class created", body = SchoolClassResponse),
        (status = 400, description = "Invalid request body")
    ),
    tag = "Classes"
)]
pub async fn create_class(
    State(state): State<AppState>,
    Json(request): Json<SchoolClassRequest>,
) -> ApiResult<(StatusCode, Json<SchoolClassResponse>)> {
    let school_class = SchoolClassService::create(&state.db, request.name).await?;
    Ok((StatusCode::CREATED, Json(school_class.into())))
}

/// Rename a class
#[utoipa::path(
    put,
    path = "/classes/{id}",
    params(("id" = i32, Path, description = "Class ID")),
    request_body = SchoolClassRequest,
    responses(
        (status = 200, description = "Class updated", body = SchoolClassResponse),
        (status = 404, description = "Class not found")
    ),
    tag = "Classes"
)]
pub async fn update_class(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<SchoolClassRequest>,
) -> ApiResult<Json<SchoolClassResponse>> {
    let school_class = SchoolClassService::update(&state.db, id, request.name).await?;
    Ok(Json(school_class.into()))
}

/// Delete a class and its lessons
#[utoipa::path(
    delete,
    path = "/classes/{id}",
    params(("id" = i32, Path, description = "Class ID")),
    responses(
        (status = 204, description = "Class deleted"),
        (status = 404, description = "Class not found")
    ),
    tag = "Classes"
)]
pub async fn delete_class(State(state): State<AppState>, Path(id): Path<i32>) -> ApiResult<StatusCode> {
    if SchoolClassService::delete(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found(format!("class {id} not found")))
    }
}
