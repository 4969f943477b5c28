use database::services::timetable_entry::{EntryDetails, EntryFilter};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct TimetableEntryRequest {
    pub school_class_id: i32,
    pub subject_id: i32,
    pub time_slot_id: i32,
    /// Overrides the subject's teacher for this lesson
    pub teacher_id: Option<i32>,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct TimetableEntryResponse {
    pub id: i32,
    pub school_class_id: i32,
    pub class_name: String,
    pub subject_id: i32,
    pub subject_name: String,
    pub time_slot_id: i32,
    pub time_slot_label: String,
    pub teacher_id: Option<i32>,
    /// Name of the override teacher, or of the subject's teacher
    pub teacher_name: Option<String>,
    pub label: String,
}

impl From<EntryDetails> for TimetableEntryResponse {
    fn from(details: EntryDetails) -> Self {
        Self {
            id: details.entry.id,
            teacher_name: details.effective_teacher().map(|t| t.full_name()),
            label: details.label(),
            time_slot_label: details.time_slot.label(),
            school_class_id: details.entry.school_class_id,
            class_name: details.school_class.name,
            subject_id: details.entry.subject_id,
            subject_name: details.subject.name,
            time_slot_id: details.entry.time_slot_id,
            teacher_id: details.entry.teacher_id,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct TimetableEntryQueryParams {
    pub class_id: Option<i32>,
    /// Case-insensitive time slot day filter
    pub day: Option<String>,
}

impl From<TimetableEntryQueryParams> for EntryFilter {
    fn from(params: TimetableEntryQueryParams) -> Self {
        Self {
            class_id: params.class_id,
            day: params.day,
        }
    }
}
