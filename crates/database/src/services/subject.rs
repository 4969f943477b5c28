use crate::entities::{subject, subject_class, teacher};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use std::collections::{BTreeSet, HashMap};

/// A subject with its optional teacher and the classes it is taught to
#[derive(Clone, Debug, PartialEq)]
pub struct SubjectDetails {
    pub subject: subject::Model,
    pub teacher: Option<teacher::Model>,
    pub class_ids: Vec<i32>,
}

pub struct SubjectService;

impl SubjectService {
    pub async fn list(db: &DatabaseConnection) -> Result<Vec<SubjectDetails>, DbErr> {
        let subjects = subject::Entity::find()
            .order_by_asc(subject::Column::Id)
            .find_also_related(teacher::Entity)
            .all(db)
            .await?;

        Self::attach_classes(db, subjects).await
    }

    pub async fn get(db: &DatabaseConnection, id: i32) -> Result<Option<SubjectDetails>, DbErr> {
        let subjects = subject::Entity::find_by_id(id)
            .find_also_related(teacher::Entity)
            .all(db)
            .await?;

        Ok(Self::attach_classes(db, subjects).await?.into_iter().next())
    }

    /// Creates a subject and links it to the given classes
    pub async fn create(
        db: &DatabaseConnection,
        name: String,
        teacher_id: Option<i32>,
        class_ids: Vec<i32>,
    ) -> Result<SubjectDetails, DbErr> {
        let txn = db.begin().await?;

        let subject = subject::ActiveModel {
            name: Set(name),
            teacher_id: Set(teacher_id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        Self::replace_classes(&txn, subject.id, &class_ids).await?;

        txn.commit().await?;

        Self::get(db, subject.id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("subject {}", subject.id)))
    }

    /// Updates a subject, replacing its class set with `class_ids`
    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        name: String,
        teacher_id: Option<i32>,
        class_ids: Vec<i32>,
    ) -> Result<SubjectDetails, DbErr> {
        let txn = db.begin().await?;

        let existing = subject::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("subject {id}")))?;

        let mut subject: subject::ActiveModel = existing.into();
        subject.name = Set(name);
        subject.teacher_id = Set(teacher_id);
        subject.update(&txn).await?;
        Self::replace_classes(&txn, id, &class_ids).await?;

        txn.commit().await?;

        Self::get(db, id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("subject {id}")))
    }

    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, DbErr> {
        let result = subject::Entity::delete_by_id(id).exec(db).await?;
        Ok(result.rows_affected > 0)
    }

    async fn replace_classes(
        txn: &DatabaseTransaction,
        subject_id: i32,
        class_ids: &[i32],
    ) -> Result<(), DbErr> {
        subject_class::Entity::delete_many()
            .filter(subject_class::Column::SubjectId.eq(subject_id))
            .exec(txn)
            .await?;

        // Duplicates would collide on the composite key
        let links: Vec<subject_class::ActiveModel> = class_ids
            .iter()
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(|school_class_id| subject_class::ActiveModel {
                subject_id: Set(subject_id),
                school_class_id: Set(school_class_id),
            })
            .collect();

        if !links.is_empty() {
            subject_class::Entity::insert_many(links)
                .exec_without_returning(txn)
                .await?;
        }

        Ok(())
    }

    async fn attach_classes(
        db: &DatabaseConnection,
        subjects: Vec<(subject::Model, Option<teacher::Model>)>,
    ) -> Result<Vec<SubjectDetails>, DbErr> {
        if subjects.is_empty() {
            return Ok(vec![]);
        }

        let subject_ids: Vec<i32> = subjects.iter().map(|(s, _)| s.id).collect();

        // Batch fetch all class links for all subjects
        let links = subject_class::Entity::find()
            .filter(subject_class::Column::SubjectId.is_in(subject_ids))
            .order_by_asc(subject_class::Column::SchoolClassId)
            .all(db)
            .await?;

        let mut classes_by_subject: HashMap<i32, Vec<i32>> = HashMap::new();
        for link in links {
            classes_by_subject
                .entry(link.subject_id)
                .or_default()
                .push(link.school_class_id);
        }

        Ok(subjects
            .into_iter()
            .map(|(subject, teacher)| SubjectDetails {
                class_ids: classes_by_subject.remove(&subject.id).unwrap_or_default(),
                subject,
                teacher,
            })
            .collect())
    }
}
