use crate::entities::{school_class, subject, teacher, time_slot, timetable_entry};
use log::debug;
use models::{days::normalize_day, labels};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};
use std::collections::{HashMap, HashSet};

/// Narrows the entry list; unset fields match everything
#[derive(Clone, Debug, Default)]
pub struct EntryFilter {
    pub class_id: Option<i32>,
    pub day: Option<String>,
}

/// A timetable entry together with every record it references
#[derive(Clone, Debug, PartialEq)]
pub struct EntryDetails {
    pub entry: timetable_entry::Model,
    pub school_class: school_class::Model,
    pub subject: subject::Model,
    pub time_slot: time_slot::Model,
    /// The entry's own teacher override
    pub teacher: Option<teacher::Model>,
    /// The teacher assigned to the subject
    pub subject_teacher: Option<teacher::Model>,
}

impl EntryDetails {
    /// The override when set, otherwise the subject's teacher
    pub fn effective_teacher(&self) -> Option<&teacher::Model> {
        self.teacher.as_ref().or(self.subject_teacher.as_ref())
    }

    /// e.g. `S1A - JD - MON 08:00-09:00`
    pub fn label(&self) -> String {
        let initials = self.subject_teacher.as_ref().and_then(|t| t.initials());

        labels::entry_label(
            &self.school_class.name,
            &self.subject.name,
            initials.as_deref(),
            &self.time_slot.label(),
        )
    }
}

pub struct TimetableEntryService;

impl TimetableEntryService {
    /// Lists entries in id order, filtered by class and/or time slot day
    pub async fn list(
        db: &DatabaseConnection,
        filter: EntryFilter,
    ) -> Result<Vec<EntryDetails>, DbErr> {
        let mut condition = Condition::all();

        if let Some(class_id) = filter.class_id {
            condition = condition.add(timetable_entry::Column::SchoolClassId.eq(class_id));
        }

        if let Some(day) = filter.day
            && !day.trim().is_empty()
        {
            condition = condition.add(time_slot::Column::Day.eq(normalize_day(&day)));
        }

        debug!("Listing timetable entries with {condition:?}");
        Self::find_details(db, condition).await
    }

    pub async fn get(db: &DatabaseConnection, id: i32) -> Result<Option<EntryDetails>, DbErr> {
        let condition = Condition::all().add(timetable_entry::Column::Id.eq(id));
        Ok(Self::find_details(db, condition).await?.into_iter().next())
    }

    pub async fn create(
        db: &DatabaseConnection,
        school_class_id: i32,
        subject_id: i32,
        time_slot_id: i32,
        teacher_id: Option<i32>,
    ) -> Result<timetable_entry::Model, DbErr> {
        timetable_entry::ActiveModel {
            school_class_id: Set(school_class_id),
            subject_id: Set(subject_id),
            time_slot_id: Set(time_slot_id),
            teacher_id: Set(teacher_id),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        school_class_id: i32,
        subject_id: i32,
        time_slot_id: i32,
        teacher_id: Option<i32>,
    ) -> Result<timetable_entry::Model, DbErr> {
        let existing = timetable_entry::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("timetable entry {id}")))?;

        let mut entry: timetable_entry::ActiveModel = existing.into();
        entry.school_class_id = Set(school_class_id);
        entry.subject_id = Set(subject_id);
        entry.time_slot_id = Set(time_slot_id);
        entry.teacher_id = Set(teacher_id);
        entry.update(db).await
    }

    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, DbErr> {
        let result = timetable_entry::Entity::delete_by_id(id).exec(db).await?;
        Ok(result.rows_affected > 0)
    }

    /// Fetches matching entries in id order with all referenced records
    ///
    /// The condition may refer to `timetable_entries` and `time_slots` columns.
    pub(crate) async fn find_details(
        db: &DatabaseConnection,
        condition: Condition,
    ) -> Result<Vec<EntryDetails>, DbErr> {
        let rows = timetable_entry::Entity::find()
            .find_also_related(time_slot::Entity)
            .filter(condition)
            .order_by_asc(timetable_entry::Column::Id)
            .all(db)
            .await?;

        if rows.is_empty() {
            return Ok(vec![]);
        }

        let class_ids: HashSet<i32> = rows.iter().map(|(e, _)| e.school_class_id).collect();
        let subject_ids: HashSet<i32> = rows.iter().map(|(e, _)| e.subject_id).collect();

        // Batch fetch classes and subjects for all entries
        let classes: HashMap<i32, school_class::Model> = school_class::Entity::find()
            .filter(school_class::Column::Id.is_in(class_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        let subjects: HashMap<i32, subject::Model> = subject::Entity::find()
            .filter(subject::Column::Id.is_in(subject_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();

        // Teachers are referenced both by overrides and by subjects
        let teacher_ids: HashSet<i32> = rows
            .iter()
            .filter_map(|(e, _)| e.teacher_id)
            .chain(subjects.values().filter_map(|s| s.teacher_id))
            .collect();

        let teachers: HashMap<i32, teacher::Model> = if teacher_ids.is_empty() {
            HashMap::new()
        } else {
            teacher::Entity::find()
                .filter(teacher::Column::Id.is_in(teacher_ids))
                .all(db)
                .await?
                .into_iter()
                .map(|t| (t.id, t))
                .collect()
        };

        let details = rows
            .into_iter()
            .filter_map(|(entry, time_slot)| {
                let time_slot = time_slot?;
                let school_class = classes.get(&entry.school_class_id)?.clone();
                let subject = subjects.get(&entry.subject_id)?.clone();
                let teacher = entry.teacher_id.and_then(|id| teachers.get(&id).cloned());
                let subject_teacher = subject.teacher_id.and_then(|id| teachers.get(&id).cloned());

                Some(EntryDetails {
                    entry,
                    school_class,
                    subject,
                    time_slot,
                    teacher,
                    subject_teacher,
                })
            })
            .collect();

        Ok(details)
    }
}
