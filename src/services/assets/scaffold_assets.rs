use include_dir::{Dir, DirEntry, include_dir};

use crate::domain::AppError;

static ASSET_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets");

/// Embedded default `weft.toml`, written verbatim by `weft init`.
pub fn default_config() -> Result<String, AppError> {
    asset_content("scaffold/weft.toml")
}

/// Embedded Minijinja template for the emitted `tailwind.config.js`.
pub fn js_config_template() -> Result<String, AppError> {
    asset_content("templates/tailwind.config.js.j2")
}

fn asset_content(path: &str) -> Result<String, AppError> {
    ASSET_DIR
        .get_file(path)
        .and_then(|file| file.contents_utf8())
        .map(|content| content.to_string())
        .ok_or_else(|| AppError::Internal(format!("Missing embedded asset: {}", path)))
}
