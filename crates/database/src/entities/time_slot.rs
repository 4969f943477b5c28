use models::{days::Weekday, labels};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "time_slots")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub day: String, // e.g. "MON", free text
    pub start_time: Time,
    pub end_time: Time,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::timetable_entry::Entity")]
    TimetableEntries,
}

impl Related<super::timetable_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimetableEntries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// The stored day as a weekday, if it names one
    pub fn weekday(&self) -> Option<Weekday> {
        self.day.parse().ok()
    }

    /// e.g. `MON 08:00-09:00`
    pub fn label(&self) -> String {
        labels::time_slot_label(&self.day, self.start_time, self.end_time)
    }
}
