use crate::entities::time_slot;
use chrono::NaiveTime;
use log::debug;
use models::days::normalize_day;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct TimeSlotService;

impl TimeSlotService {
    /// Lists time slots by start time, optionally restricted to one day
    pub async fn list(
        db: &DatabaseConnection,
        day: Option<&str>,
    ) -> Result<Vec<time_slot::Model>, DbErr> {
        let mut query = time_slot::Entity::find();

        if let Some(day) = day
            && !day.trim().is_empty()
        {
            let day = normalize_day(day);
            debug!("Filtering time slots by day {day}");
            query = query.filter(time_slot::Column::Day.eq(day));
        }

        query
            .order_by_asc(time_slot::Column::StartTime)
            .order_by_asc(time_slot::Column::Day)
            .order_by_asc(time_slot::Column::Id)
            .all(db)
            .await
    }

    pub async fn get(db: &DatabaseConnection, id: i32) -> Result<Option<time_slot::Model>, DbErr> {
        time_slot::Entity::find_by_id(id).one(db).await
    }

    /// Creates a time slot; the day is stored normalised (`"mon"` -> `"MON"`)
    pub async fn create(
        db: &DatabaseConnection,
        day: &str,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Result<time_slot::Model, DbErr> {
        time_slot::ActiveModel {
            day: Set(normalize_day(day)),
            start_time: Set(start_time),
            end_time: Set(end_time),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        day: &str,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Result<time_slot::Model, DbErr> {
        let existing = Self::get(db, id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("time slot {id}")))?;

        let mut slot: time_slot::ActiveModel = existing.into();
        slot.day = Set(normalize_day(day));
        slot.start_time = Set(start_time);
        slot.end_time = Set(end_time);
        slot.update(db).await
    }

    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, DbErr> {
        let result = time_slot::Entity::delete_by_id(id).exec(db).await?;
        Ok(result.rows_affected > 0)
    }
}
