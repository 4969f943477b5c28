use crate::entities::school_class;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

pub struct SchoolClassService;

impl SchoolClassService {
    pub async fn list(db: &DatabaseConnection) -> Result<Vec<school_class::Model>, DbErr> {
        school_class::Entity::find()
            .order_by_asc(school_class::Column::Id)
            .all(db)
            .await
    }

    pub async fn get(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<school_class::Model>, DbErr> {
        school_class::Entity::find_by_id(id).one(db).await
    }

    pub async fn create(db: &DatabaseConnection, name: String) -> Result<school_class::Model, DbErr> {
        school_class::ActiveModel {
            name: Set(name),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        name: String,
    ) -> Result<school_class::Model, DbErr> {
        let existing = Self::get(db, id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("class {id}")))?;

        let mut class: school_class::ActiveModel = existing.into();
        class.name = Set(name);
        class.update(db).await
    }

    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, DbErr> {
        let result = school_class::Entity::delete_by_id(id).exec(db).await?;
        Ok(result.rows_affected > 0)
    }
}
