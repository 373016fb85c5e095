//! Style configuration domain model.

mod parse;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{AppError, ColorName, ContentPattern, HexColor, PluginRef};

pub use parse::parse_config_content;

/// Configuration file name at the project root.
pub const CONFIG_FILE: &str = "weft.toml";

/// Emitted JavaScript config module consumed by the external build tool.
pub const OUTPUT_FILE: &str = "tailwind.config.js";

/// Default content patterns scanned for class usage.
pub const DEFAULT_CONTENT: [&str; 2] = ["./index.html", "./src/**/*.rs"];

/// Default color palette, replacing the build tool's design-token defaults.
pub const DEFAULT_PALETTE: [(&str, &str); 11] = [
    ("white", "#fff"),
    ("primary", "#7c3aed"),
    ("secondary", "#006bff"),
    ("accent", "#009100"),
    ("neutral", "#051a15"),
    ("base", "#2e2a2e"),
    ("fore", "#1F1C1F"),
    ("info", "#00ebff"),
    ("success", "#2bd50f"),
    ("warning", "#ff7300"),
    ("error", "#d60015"),
];

/// Style configuration loaded from `weft.toml`.
///
/// Plain immutable data: constructed once per command invocation and
/// read-only thereafter. Missing sections fall back to the defaults above,
/// so an empty file resolves to the full default configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleConfig {
    /// Ordered glob patterns identifying source files to scan.
    #[serde(default = "default_content")]
    pub content: Vec<ContentPattern>,
    /// Design-token overrides.
    #[serde(default)]
    pub theme: Theme,
    /// Ordered opaque plugin descriptors.
    #[serde(default)]
    pub plugins: Vec<PluginRef>,
}

/// Design-token overrides for the external build tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Theme {
    /// Color palette keyed by name. Names are looked up by key, not by
    /// position, so a mapping is the right shape.
    #[serde(default = "default_colors")]
    pub colors: BTreeMap<ColorName, HexColor>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self { content: default_content(), theme: Theme::default(), plugins: Vec::new() }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self { colors: default_colors() }
    }
}

impl StyleConfig {
    /// Serialize the configuration back to TOML.
    pub fn to_toml_string(&self) -> Result<String, AppError> {
        toml::to_string_pretty(self).map_err(AppError::from)
    }

    /// Groups of color names whose canonical values collide.
    ///
    /// `#fff` and `#FFFFFF` are distinct spellings of the same value; the
    /// external tool resolves both to one color, so collisions usually mean
    /// a palette entry is redundant.
    pub fn duplicate_color_values(&self) -> Vec<(String, Vec<ColorName>)> {
        let mut by_value: BTreeMap<String, Vec<ColorName>> = BTreeMap::new();
        for (name, color) in &self.theme.colors {
            by_value.entry(color.canonical()).or_default().push(name.clone());
        }
        by_value.into_iter().filter(|(_, names)| names.len() > 1).collect()
    }
}

fn default_content() -> Vec<ContentPattern> {
    DEFAULT_CONTENT
        .iter()
        .map(|pattern| ContentPattern::new(pattern).expect("default content pattern must be valid"))
        .collect()
}

fn default_colors() -> BTreeMap<ColorName, HexColor> {
    DEFAULT_PALETTE
        .iter()
        .map(|(name, value)| {
            (
                ColorName::new(name).expect("default color name must be valid"),
                HexColor::new(value).expect("default color literal must be valid"),
            )
        })
        .collect()
}
