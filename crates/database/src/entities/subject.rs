use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "subjects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub teacher_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::teacher::Entity",
        from = "Column::TeacherId",
        to = "super::teacher::Column::Id"
    )]
    Teacher,
    #[sea_orm(has_many = "super::subject_class::Entity")]
    SubjectClasses,
    #[sea_orm(has_many = "super::timetable_entry::Entity")]
    TimetableEntries,
}

impl Related<super::teacher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::subject_class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubjectClasses.def()
    }
}

impl Related<super::timetable_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimetableEntries.def()
    }
}

// Many-to-many relationship with school classes
impl Related<super::school_class::Entity> for Entity {
    fn to() -> RelationDef {
        super::subject_class::Relation::SchoolClass.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::subject_class::Relation::Subject.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
