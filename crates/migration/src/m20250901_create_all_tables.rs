use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create teachers table
        manager
            .create_table(
                Table::create()
                    .table(Teachers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Teachers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Teachers::FirstName).string_len(50).not_null())
                    .col(ColumnDef::new(Teachers::LastName).string_len(50).not_null())
                    .to_owned(),
            )
            .await?;

        // Create school_classes table
        manager
            .create_table(
                Table::create()
                    .table(SchoolClasses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SchoolClasses::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SchoolClasses::Name).string_len(20).not_null())
                    .to_owned(),
            )
            .await?;

        // Create subjects table
        manager
            .create_table(
                Table::create()
                    .table(Subjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subjects::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Subjects::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Subjects::TeacherId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-subjects-teacher_id")
                            .from(Subjects::Table, Subjects::TeacherId)
                            .to(Teachers::Table, Teachers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create subject_classes junction table (many-to-many)
        manager
            .create_table(
                Table::create()
                    .table(SubjectClasses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SubjectClasses::SubjectId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SubjectClasses::SchoolClassId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk-subject_classes")
                            .col(SubjectClasses::SubjectId)
                            .col(SubjectClasses::SchoolClassId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-subject_classes-subject_id")
                            .from(SubjectClasses::Table, SubjectClasses::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-subject_classes-school_class_id")
                            .from(SubjectClasses::Table, SubjectClasses::SchoolClassId)
                            .to(SchoolClasses::Table, SchoolClasses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create time_slots table
        manager
            .create_table(
                Table::create()
                    .table(TimeSlots::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TimeSlots::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TimeSlots::Day).string_len(10).not_null())
                    .col(ColumnDef::new(TimeSlots::StartTime).time().not_null())
                    .col(ColumnDef::new(TimeSlots::EndTime).time().not_null())
                    .to_owned(),
            )
            .await?;

        // Create timetable_entries table
        manager
            .create_table(
                Table::create()
                    .table(TimetableEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TimetableEntries::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TimetableEntries::SchoolClassId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TimetableEntries::SubjectId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TimetableEntries::TimeSlotId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TimetableEntries::TeacherId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-timetable_entries-school_class_id")
                            .from(TimetableEntries::Table, TimetableEntries::SchoolClassId)
                            .to(SchoolClasses::Table, SchoolClasses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-timetable_entries-subject_id")
                            .from(TimetableEntries::Table, TimetableEntries::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-timetable_entries-time_slot_id")
                            .from(TimetableEntries::Table, TimetableEntries::TimeSlotId)
                            .to(TimeSlots::Table, TimeSlots::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-timetable_entries-teacher_id")
                            .from(TimetableEntries::Table, TimetableEntries::TeacherId)
                            .to(Teachers::Table, Teachers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order due to foreign key constraints
        manager
            .drop_table(Table::drop().table(TimetableEntries::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(TimeSlots::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(SubjectClasses::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Subjects::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(SchoolClasses::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Teachers::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Teachers {
    Table,
    Id,
    FirstName,
    LastName,
}

#[derive(Iden)]
enum SchoolClasses {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum Subjects {
    Table,
    Id,
    Name,
    TeacherId,
}

#[derive(Iden)]
enum SubjectClasses {
    Table,
    SubjectId,
    SchoolClassId,
}

#[derive(Iden)]
enum TimeSlots {
    Table,
    Id,
    Day,
    StartTime,
    EndTime,
}

#[derive(Iden)]
enum TimetableEntries {
    Table,
    Id,
    SchoolClassId,
    SubjectId,
    TimeSlotId,
    TeacherId,
}
