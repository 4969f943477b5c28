use database::db;
use generator::{config::GeneratorConfig, generate::generate_all};
use log::{error, info};
use migration::{Migrator, MigratorTrait};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let config = GeneratorConfig::from_env();

    let db = match db::create_connection().await {
        Ok(db) => db,
        Err(err) => {
            error!("Failed to connect to the database: {err}");
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = Migrator::up(&db, None).await {
        error!("Failed to run migrations: {err}");
        eprintln!("Error: {err}");
        return ExitCode::FAILURE;
    }
    info!("Migrations applied");

    println!("Generating timetables...");

    match generate_all(&db, &config).await {
        Ok(paths) => {
            info!(
                "Wrote {} files to {}",
                paths.len(),
                config.output_dir.display()
            );
            println!("All timetable PDFs generated successfully.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Timetable generation failed: {err}");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
