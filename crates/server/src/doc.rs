use crate::error::ErrorBody;
use utoipa::OpenApi;

/// API Documentation
///
/// Paths are collected from the router in [`crate::router`].
#[derive(OpenApi)]
#[openapi(
    components(schemas(ErrorBody)),
    tags(
        (name = "Health", description = "Liveness endpoints"),
        (name = "Teachers", description = "Teacher records"),
        (name = "Classes", description = "School class records"),
        (name = "Subjects", description = "Subjects and the classes they are taught to"),
        (name = "Time slots", description = "Weekly time slots"),
        (name = "Timetable entries", description = "Scheduled lessons"),
    ),
    info(
        title = "Timetable API",
        version = "1.0.0",
        description = "Administration API for the school timetable store",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
