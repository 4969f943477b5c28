use database::db;
use log::{error, info};
use migration::{Migrator, MigratorTrait};
use server::{AppState, router, utils::shutdown::shutdown_signal};
use std::{env, error::Error, process::ExitCode};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Server failed: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    let db = db::create_connection().await?;
    Migrator::up(&db, None).await?;
    info!("Migrations applied");

    let addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Running axum on http://{addr}");

    axum::serve(listener, router(AppState { db }))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
