pub mod color;
pub mod config;
pub mod content;
pub mod error;
pub mod plugin;

pub use color::{ColorName, HexColor};
pub use config::{CONFIG_FILE, OUTPUT_FILE, StyleConfig, Theme, parse_config_content};
pub use content::ContentPattern;
pub use error::AppError;
pub use plugin::PluginRef;
