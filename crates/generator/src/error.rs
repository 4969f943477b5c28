use sea_orm::DbErr;
use std::path::PathBuf;
use thiserror::Error;

/// Any failure aborts the whole generation run
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("database error: {0}")]
    Database(#[from] DbErr),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to render PDF: {0}")]
    Pdf(#[from] printpdf::Error),
}
