use crate::domain::{AppError, StyleConfig};

/// Rendering seam for the emitted JavaScript config module.
pub trait ConfigRenderer {
    /// Render `tailwind.config.js` content from a style configuration.
    fn render_js_config(&self, config: &StyleConfig) -> Result<String, AppError>;
}
