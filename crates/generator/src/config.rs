use std::{env, path::PathBuf};

/// Printed at the top of every page unless `SCHOOL_NAME` is set
pub const DEFAULT_SCHOOL_NAME: &str = "MISEMWA FRIENDS SENIOR SCHOOL";

/// Output directory, relative to the current working directory
pub const DEFAULT_OUTPUT_DIR: &str = "timetables_pdfs";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub school_name: String,
    pub output_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            school_name: DEFAULT_SCHOOL_NAME.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl GeneratorConfig {
    /// Reads `SCHOOL_NAME` and `TIMETABLE_OUTPUT_DIR`, honouring a `.env` file
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        Self {
            school_name: env::var("SCHOOL_NAME").unwrap_or(defaults.school_name),
            output_dir: env::var_os("TIMETABLE_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
        }
    }
}
