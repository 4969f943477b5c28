#![allow(dead_code)]

use chrono::NaiveTime;
use database::db;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use tempfile::TempDir;

/// Opens a fresh, fully migrated SQLite database inside a temp directory
///
/// The directory must outlive the connection, so it is returned alongside.
pub async fn setup() -> (TempDir, DatabaseConnection) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let url = format!(
        "sqlite://{}?mode=rwc",
        dir.path().join("timetable.sqlite").display()
    );

    let db = db::connect(&url).await.expect("connect to sqlite");
    Migrator::up(&db, None).await.expect("run migrations");

    (dir, db)
}

pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time")
}
