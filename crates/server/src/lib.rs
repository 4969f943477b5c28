pub mod doc;
pub mod dtos;
pub mod error;
pub mod routes;
pub mod utils;

use crate::{
    doc::ApiDoc,
    routes::{health, root, school_class, subject, teacher, time_slot, timetable_entry},
};
use axum::{Json, Router, routing::get};
use sea_orm::DatabaseConnection;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

/// Served alongside the API
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

/// Builds the admin API with its OpenAPI document
pub fn router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(root::root))
        .routes(routes!(health::health))
        .routes(routes!(teacher::list_teachers, teacher::create_teacher))
        .routes(routes!(
            teacher::get_teacher,
            teacher::update_teacher,
            teacher::delete_teacher
        ))
        .routes(routes!(school_class::list_classes, school_class::create_class))
        .routes(routes!(
            school_class::get_class,
            school_class::update_class,
            school_class::delete_class
        ))
        .routes(routes!(subject::list_subjects, subject::create_subject))
        .routes(routes!(
            subject::get_subject,
            subject::update_subject,
            subject::delete_subject
        ))
        .routes(routes!(time_slot::list_time_slots, time_slot::create_time_slot))
        .routes(routes!(
            time_slot::get_time_slot,
            time_slot::update_time_slot,
            time_slot::delete_time_slot
        ))
        .routes(routes!(
            timetable_entry::list_entries,
            timetable_entry::create_entry
        ))
        .routes(routes!(
            timetable_entry::get_entry,
            timetable_entry::update_entry,
            timetable_entry::delete_entry
        ))
        .split_for_parts();

    router
        .route(OPENAPI_PATH, get(move || async move { Json(api) }))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
        .with_state(state)
}
