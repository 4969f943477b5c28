use database::entities::teacher;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct TeacherRequest {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct TeacherResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub name: String,
    /// `null` when either name is blank
    pub initials: Option<String>,
}

impl From<teacher::Model> for TeacherResponse {
    fn from(teacher: teacher::Model) -> Self {
        Self {
            id: teacher.id,
            name: teacher.full_name(),
            initials: teacher.initials(),
            first_name: teacher.first_name,
            last_name: teacher.last_name,
        }
    }
}
