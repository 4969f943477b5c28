use chrono::NaiveTime;
use database::entities::time_slot;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct TimeSlotRequest {
    /// e.g. `MON` or `monday`, stored as the upper-case code
    pub day: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct TimeSlotResponse {
    pub id: i32,
    pub day: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub label: String,
}

impl From<time_slot::Model> for TimeSlotResponse {
    fn from(slot: time_slot::Model) -> Self {
        Self {
            id: slot.id,
            label: slot.label(),
            day: slot.day,
            start_time: slot.start_time,
            end_time: slot.end_time,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct TimeSlotQueryParams {
    /// Case-insensitive day filter
    pub day: Option<String>,
}
