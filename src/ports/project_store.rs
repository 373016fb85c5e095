use std::path::PathBuf;

use crate::domain::AppError;

/// Storage seam for files under a project root.
///
/// Paths are project-relative strings; implementations resolve them against
/// their root and must refuse paths that escape it.
pub trait ProjectStore {
    /// Whether `weft.toml` exists at the project root.
    fn config_exists(&self) -> bool;

    /// Read a project-relative file to a string.
    fn read_file(&self, path: &str) -> Result<String, AppError>;

    /// Write a project-relative file, creating parent directories as needed.
    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError>;

    /// Whether a project-relative file exists.
    fn file_exists(&self, path: &str) -> bool;

    /// Resolve a project-relative path against the root.
    fn resolve_path(&self, path: &str) -> PathBuf;
}
