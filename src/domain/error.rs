use std::io;

use thiserror::Error;

/// Library-wide error type for weft operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// weft.toml already exists at the target location.
    #[error("weft.toml already exists in current directory")]
    ConfigExists,

    /// No weft.toml found in the current directory.
    #[error("No weft.toml found in current directory. Run 'weft init' first.")]
    ConfigNotFound,

    /// Hex color literal is malformed.
    #[error("Invalid hex color '{0}': must be '#' followed by 3 or 6 hex digits")]
    InvalidHexColor(String),

    /// Color name identifier is invalid.
    #[error("Invalid color name '{0}': must be alphanumeric with hyphens or underscores")]
    InvalidColorName(String),

    /// Content pattern is invalid.
    #[error("Invalid content pattern '{0}': must be a non-empty path or glob")]
    InvalidContentPattern(String),

    /// Plugin descriptor is invalid.
    #[error("Invalid plugin descriptor '{0}': must be non-empty")]
    InvalidPluginRef(String),

    /// Emitted output has local modifications.
    #[error("{0} was modified locally. Re-run with --force to overwrite.")]
    ModifiedOutput(String),

    /// Path escapes the project root.
    #[error("Path '{0}' escapes the project root")]
    PathTraversal(String),

    /// Template rendering failed.
    #[error("Failed to render {template}: {reason}")]
    RenderError { template: String, reason: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Internal invariant violation (missing embedded asset).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidHexColor(_)
            | AppError::InvalidColorName(_)
            | AppError::InvalidContentPattern(_)
            | AppError::InvalidPluginRef(_)
            | AppError::PathTraversal(_)
            | AppError::RenderError { .. }
            | AppError::TomlParse(_)
            | AppError::TomlSerialize(_) => io::ErrorKind::InvalidInput,
            AppError::Internal(_) => io::ErrorKind::Other,
            AppError::ConfigNotFound => io::ErrorKind::NotFound,
            AppError::ConfigExists => io::ErrorKind::AlreadyExists,
            AppError::ModifiedOutput(_) => io::ErrorKind::InvalidData,
        }
    }
}
