//! Pure parse for style configuration (`weft.toml`).

use crate::domain::{AppError, StyleConfig};

/// Parse style configuration from TOML content.
///
/// Field-level validation happens during deserialization: hex literals,
/// color names, content patterns, and plugin descriptors are validated
/// newtypes, and unknown keys are rejected outright.
pub fn parse_config_content(content: &str) -> Result<StyleConfig, AppError> {
    let config: StyleConfig = toml::from_str(content)?;
    Ok(config)
}
