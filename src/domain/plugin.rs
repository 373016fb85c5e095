//! Plugin descriptors: opaque references to build-tool extension modules.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// An opaque plugin descriptor (`@tailwindcss/typography`).
///
/// Descriptors pass through to the emitted configuration untouched; weft
/// never loads or interprets plugin code. Only empty descriptors are
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PluginRef(String);

impl PluginRef {
    /// Validate and create a new plugin descriptor.
    pub fn new(descriptor: &str) -> Result<Self, AppError> {
        if descriptor.trim().is_empty() {
            return Err(AppError::InvalidPluginRef(descriptor.to_string()));
        }
        Ok(Self(descriptor.to_string()))
    }

    /// Return the descriptor as written.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PluginRef {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PluginRef::new(&value)
    }
}

impl From<PluginRef> for String {
    fn from(plugin: PluginRef) -> Self {
        plugin.0
    }
}

impl AsRef<str> for PluginRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PluginRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn npm_style_specifiers_pass_through() {
        let plugin = PluginRef::new("@tailwindcss/typography").unwrap();
        assert_eq!(plugin.as_str(), "@tailwindcss/typography");

        let scoped = PluginRef::new("daisyui").unwrap();
        assert_eq!(scoped.as_str(), "daisyui");
    }

    #[test]
    fn rejects_empty_descriptors() {
        assert!(PluginRef::new("").is_err());
        assert!(PluginRef::new("  ").is_err());
    }
}
