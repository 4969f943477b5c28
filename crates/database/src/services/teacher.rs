use crate::entities::teacher;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

pub struct TeacherService;

impl TeacherService {
    /// All teachers, oldest first
    pub async fn list(db: &DatabaseConnection) -> Result<Vec<teacher::Model>, DbErr> {
        teacher::Entity::find()
            .order_by_asc(teacher::Column::Id)
            .all(db)
            .await
    }

    pub async fn get(db: &DatabaseConnection, id: i32) -> Result<Option<teacher::Model>, DbErr> {
        teacher::Entity::find_by_id(id).one(db).await
    }

    pub async fn create(
        db: &DatabaseConnection,
        first_name: String,
        last_name: String,
    ) -> Result<teacher::Model, DbErr> {
        let teacher = teacher::ActiveModel {
            first_name: Set(first_name),
            last_name: Set(last_name),
            ..Default::default()
        }
        .insert(db)
        .await?;

        debug!("Created teacher {}", teacher.id);
        Ok(teacher)
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        first_name: String,
        last_name: String,
    ) -> Result<teacher::Model, DbErr> {
        let existing = Self::get(db, id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("teacher {id}")))?;

        let mut teacher: teacher::ActiveModel = existing.into();
        teacher.first_name = Set(first_name);
        teacher.last_name = Set(last_name);
        teacher.update(db).await
    }

    /// Deletes a teacher along with their subjects and timetable entries
    ///
    /// # Returns
    /// * `true` if a row was removed
    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, DbErr> {
        let result = teacher::Entity::delete_by_id(id).exec(db).await?;
        Ok(result.rows_affected > 0)
    }
}
