//! Color domain types: hex literals and palette key identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// A hex color literal as written in the configuration (`#RGB` or `#RRGGBB`).
///
/// The literal is stored exactly as the author spelled it; `#FFF` and `#fff`
/// are distinct values and serialize back unchanged. Use [`HexColor::canonical`]
/// when comparing values rather than spellings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Validate and create a new hex color literal.
    pub fn new(literal: &str) -> Result<Self, AppError> {
        let Some(digits) = literal.strip_prefix('#') else {
            return Err(AppError::InvalidHexColor(literal.to_string()));
        };
        let valid = matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit());
        if !valid {
            return Err(AppError::InvalidHexColor(literal.to_string()));
        }
        Ok(Self(literal.to_string()))
    }

    /// Return the literal as written.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical `#rrggbb` form: short literals expanded, digits lowercased.
    pub fn canonical(&self) -> String {
        let digits = &self.0[1..];
        let mut out = String::with_capacity(7);
        out.push('#');
        if digits.len() == 3 {
            for c in digits.chars() {
                let c = c.to_ascii_lowercase();
                out.push(c);
                out.push(c);
            }
        } else {
            out.extend(digits.chars().map(|c| c.to_ascii_lowercase()));
        }
        out
    }
}

impl TryFrom<String> for HexColor {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        HexColor::new(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A palette key identifier (`primary`, `base`, ...).
///
/// Names are looked up by key, not by position, so they must be stable
/// identifiers: non-empty, alphanumeric plus hyphens or underscores.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColorName(String);

impl ColorName {
    /// Validate and create a new color name.
    pub fn new(name: &str) -> Result<Self, AppError> {
        if name.is_empty()
            || !name.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            return Err(AppError::InvalidColorName(name.to_string()));
        }
        Ok(Self(name.to_string()))
    }

    /// Return the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ColorName {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ColorName::new(&value)
    }
}

impl From<ColorName> for String {
    fn from(name: ColorName) -> Self {
        name.0
    }
}

impl std::ops::Deref for ColorName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for ColorName {
    fn as_ref(&self) -> &str {
        self
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
