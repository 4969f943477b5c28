use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Indexes on timetable_entries for the per-class and per-teacher lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_timetable_entries_school_class_id")
                    .table(TimetableEntries::Table)
                    .col(TimetableEntries::SchoolClassId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_timetable_entries_teacher_id")
                    .table(TimetableEntries::Table)
                    .col(TimetableEntries::TeacherId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_timetable_entries_time_slot_id")
                    .table(TimetableEntries::Table)
                    .col(TimetableEntries::TimeSlotId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_subjects_teacher_id")
                    .table(Subjects::Table)
                    .col(Subjects::TeacherId)
                    .to_owned(),
            )
            .await?;

        // Day filter in the admin list, start time ordering for columns
        manager
            .create_index(
                Index::create()
                    .name("idx_time_slots_day")
                    .table(TimeSlots::Table)
                    .col(TimeSlots::Day)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_time_slots_start_time")
                    .table(TimeSlots::Table)
                    .col(TimeSlots::StartTime)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop indexes in reverse order
        for name in [
            "idx_time_slots_start_time",
            "idx_time_slots_day",
            "idx_subjects_teacher_id",
            "idx_timetable_entries_time_slot_id",
            "idx_timetable_entries_teacher_id",
            "idx_timetable_entries_school_class_id",
        ] {
            manager
                .drop_index(Index::drop().name(name).to_owned())
                .await?;
        }

        Ok(())
    }
}

#[derive(Iden)]
enum TimetableEntries {
    Table,
    SchoolClassId,
    TimeSlotId,
    TeacherId,
}

#[derive(Iden)]
enum Subjects {
    Table,
    TeacherId,
}

#[derive(Iden)]
enum TimeSlots {
    Table,
    Day,
    StartTime,
}
