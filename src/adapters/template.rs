use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

use crate::domain::{AppError, OUTPUT_FILE, StyleConfig};
use crate::ports::ConfigRenderer;
use crate::services::assets;

/// Renderer for the emitted `tailwind.config.js`, backed by Minijinja.
pub struct JsConfigRenderer;

impl JsConfigRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsConfigRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Flattened template context for the JS config module.
#[derive(Serialize)]
struct JsConfigContext {
    content: Vec<String>,
    colors: Vec<ColorEntry>,
    plugins: Vec<String>,
}

#[derive(Serialize)]
struct ColorEntry {
    name: String,
    value: String,
}

impl From<&StyleConfig> for JsConfigContext {
    fn from(config: &StyleConfig) -> Self {
        Self {
            content: config.content.iter().map(|pattern| pattern.as_str().to_string()).collect(),
            colors: config
                .theme
                .colors
                .iter()
                .map(|(name, value)| ColorEntry { name: name.to_string(), value: value.to_string() })
                .collect(),
            plugins: config.plugins.iter().map(|plugin| plugin.as_str().to_string()).collect(),
        }
    }
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

impl ConfigRenderer for JsConfigRenderer {
    fn render_js_config(&self, config: &StyleConfig) -> Result<String, AppError> {
        let template = assets::js_config_template()?;

        let env = ENV.get_or_init(|| {
            let mut env = Environment::new();
            env.set_undefined_behavior(UndefinedBehavior::Strict);
            env
        });

        env.render_str(&template, JsConfigContext::from(config)).map_err(|err| {
            AppError::RenderError { template: OUTPUT_FILE.to_string(), reason: err.to_string() }
        })
    }
}
