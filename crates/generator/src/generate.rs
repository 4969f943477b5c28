use crate::{
    config::GeneratorConfig,
    document::TimetableDocument,
    error::GenerateError,
    render,
};
use database::{
    entities::{school_class, teacher},
    services::{
        school_class::SchoolClassService,
        teacher::TeacherService,
        timetable::{SlotColumn, TimetableService},
    },
};
use log::{debug, info};
use sea_orm::DatabaseConnection;
use std::path::{Path, PathBuf};

/// Builds the timetable of one class
pub async fn class_document(
    db: &DatabaseConnection,
    school_class: &school_class::Model,
    columns: &[SlotColumn],
) -> Result<TimetableDocument, GenerateError> {
    let lessons = TimetableService::lessons_for_class(db, school_class.id).await?;
    Ok(TimetableDocument::for_class(school_class, columns, &lessons))
}

/// Builds the timetable of one teacher
pub async fn teacher_document(
    db: &DatabaseConnection,
    teacher: &teacher::Model,
    columns: &[SlotColumn],
) -> Result<TimetableDocument, GenerateError> {
    let lessons = TimetableService::lessons_for_teacher(db, teacher.id).await?;
    Ok(TimetableDocument::for_teacher(teacher, columns, &lessons))
}

/// Writes one PDF per class, then one per teacher, into the output directory
///
/// Existing files with the same name are overwritten. Returns the written
/// paths in generation order. The first failure aborts the run.
pub async fn generate_all(
    db: &DatabaseConnection,
    config: &GeneratorConfig,
) -> Result<Vec<PathBuf>, GenerateError> {
    tokio::fs::create_dir_all(&config.output_dir)
        .await
        .map_err(|source| GenerateError::Io {
            path: config.output_dir.clone(),
            source,
        })?;

    let columns = TimetableService::columns(db).await?;
    debug!("Rendering {} time columns", columns.len());

    let mut written = Vec::new();

    for school_class in SchoolClassService::list(db).await? {
        let document = class_document(db, &school_class, &columns).await?;
        written.push(write_document(&document, config).await?);
    }

    for teacher in TeacherService::list(db).await? {
        let document = teacher_document(db, &teacher, &columns).await?;
        written.push(write_document(&document, config).await?);
    }

    Ok(written)
}

async fn write_document(
    document: &TimetableDocument,
    config: &GeneratorConfig,
) -> Result<PathBuf, GenerateError> {
    let bytes = render::render(document, &config.school_name)?;
    let path = output_path(&config.output_dir, &document.file_name);

    tokio::fs::write(&path, bytes)
        .await
        .map_err(|source| GenerateError::Io {
            path: path.clone(),
            source,
        })?;

    info!("Generated {}", path.display());
    Ok(path)
}

fn output_path(dir: &Path, file_name: &str) -> PathBuf {
    dir.join(file_name)
}
