use database::entities::school_class;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct SchoolClassRequest {
    pub name: String,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct SchoolClassResponse {
    pub id: i32,
    pub name: String,
}

impl From<school_class::Model> for SchoolClassResponse {
    fn from(school_class: school_class::Model) -> Self {
        Self {
            id: school_class.id,
            name: school_class.name,
        }
    }
}
