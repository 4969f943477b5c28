use log::{LevelFilter, debug};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::env;

/// Used when `DATABASE_URL` is not set
pub const DEFAULT_DATABASE_URL: &str = "sqlite://timetable.sqlite?mode=rwc";

/// Resolves the database URL from the environment, honouring a `.env` file
pub fn database_url() -> String {
    dotenvy::dotenv().ok();
    env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Creates a database connection from the configured URL
pub async fn create_connection() -> Result<DatabaseConnection, DbErr> {
    connect(&database_url()).await
}

/// Creates a database connection to the given URL
pub async fn connect(url: &str) -> Result<DatabaseConnection, DbErr> {
    debug!("Connecting to {url}");

    let mut options = ConnectOptions::new(url);
    options.sqlx_logging_level(LevelFilter::Debug);

    Database::connect(options).await
}
