use database::services::subject::SubjectDetails;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct SubjectRequest {
    pub name: String,
    pub teacher_id: Option<i32>,
    /// Replaces the full set of classes the subject is taught to
    #[serde(default)]
    pub class_ids: Vec<i32>,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct SubjectResponse {
    pub id: i32,
    pub name: String,
    pub teacher_id: Option<i32>,
    pub teacher_name: Option<String>,
    pub class_ids: Vec<i32>,
}

impl From<SubjectDetails> for SubjectResponse {
    fn from(details: SubjectDetails) -> Self {
        Self {
            id: details.subject.id,
            name: details.subject.name,
            teacher_id: details.subject.teacher_id,
            teacher_name: details.teacher.map(|t| t.full_name()),
            class_ids: details.class_ids,
        }
    }
}
