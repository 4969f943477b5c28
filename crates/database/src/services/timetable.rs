//! Read-side queries behind the rendered timetables

use crate::{
    entities::{subject, time_slot, timetable_entry},
    services::timetable_entry::{EntryDetails, TimetableEntryService},
};
use chrono::NaiveTime;
use models::days::Weekday;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use std::collections::HashSet;

/// One column of a rendered timetable
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotColumn {
    pub start_time: NaiveTime,
    /// End time of the first slot sharing this start time
    pub end_time: NaiveTime,
}

/// A timetable entry flattened to what a cell needs
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lesson {
    pub entry_id: i32,
    /// `None` when the slot's day text names no weekday
    pub day: Option<Weekday>,
    pub start_time: NaiveTime,
    pub subject_name: String,
    pub class_name: String,
    /// Initials of the entry's effective teacher
    pub teacher_initials: Option<String>,
}

impl From<EntryDetails> for Lesson {
    fn from(details: EntryDetails) -> Self {
        let teacher_initials = details.effective_teacher().and_then(|t| t.initials());

        Self {
            entry_id: details.entry.id,
            day: details.time_slot.weekday(),
            start_time: details.time_slot.start_time,
            subject_name: details.subject.name,
            class_name: details.school_class.name,
            teacher_initials,
        }
    }
}

pub struct TimetableService;

impl TimetableService {
    /// Distinct start times across all time slots, ascending
    ///
    /// Slots that differ only by day collapse into one column.
    pub async fn columns(db: &DatabaseConnection) -> Result<Vec<SlotColumn>, DbErr> {
        let slots = time_slot::Entity::find()
            .order_by_asc(time_slot::Column::StartTime)
            .order_by_asc(time_slot::Column::Id)
            .all(db)
            .await?;

        let mut seen = HashSet::new();
        let columns = slots
            .into_iter()
            .filter(|slot| seen.insert(slot.start_time))
            .map(|slot| SlotColumn {
                start_time: slot.start_time,
                end_time: slot.end_time,
            })
            .collect();

        Ok(columns)
    }

    /// Every lesson of a class, in entry id order
    pub async fn lessons_for_class(
        db: &DatabaseConnection,
        school_class_id: i32,
    ) -> Result<Vec<Lesson>, DbErr> {
        let condition =
            Condition::all().add(timetable_entry::Column::SchoolClassId.eq(school_class_id));

        Self::lessons(db, condition).await
    }

    /// Every lesson whose effective teacher is `teacher_id`, in entry id order
    ///
    /// That is entries overriding to this teacher, plus entries without an
    /// override whose subject this teacher teaches.
    pub async fn lessons_for_teacher(
        db: &DatabaseConnection,
        teacher_id: i32,
    ) -> Result<Vec<Lesson>, DbErr> {
        let taught_subject_ids: Vec<i32> = subject::Entity::find()
            .select_only()
            .column(subject::Column::Id)
            .filter(subject::Column::TeacherId.eq(teacher_id))
            .into_tuple()
            .all(db)
            .await?;

        let condition = Condition::any()
            .add(timetable_entry::Column::TeacherId.eq(teacher_id))
            .add(
                Condition::all()
                    .add(timetable_entry::Column::TeacherId.is_null())
                    .add(timetable_entry::Column::SubjectId.is_in(taught_subject_ids)),
            );

        Self::lessons(db, condition).await
    }

    async fn lessons(db: &DatabaseConnection, condition: Condition) -> Result<Vec<Lesson>, DbErr> {
        let details = TimetableEntryService::find_details(db, condition).await?;
        Ok(details.into_iter().map(Lesson::from).collect())
    }
}
