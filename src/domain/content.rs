//! Content patterns: the source globs scanned for class usage.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// A glob or path pattern identifying source files to scan (`./src/**/*.rs`).
///
/// Patterns are stored verbatim; the external build tool resolves them
/// against its own project root. Only emptiness is rejected here; path
/// hygiene beyond that is reported as `check` warnings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContentPattern(String);

impl ContentPattern {
    /// Validate and create a new content pattern.
    pub fn new(pattern: &str) -> Result<Self, AppError> {
        if pattern.trim().is_empty() {
            return Err(AppError::InvalidContentPattern(pattern.to_string()));
        }
        Ok(Self(pattern.to_string()))
    }

    /// Return the pattern as written.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the pattern is an absolute path rather than a project-relative one.
    pub fn is_absolute(&self) -> bool {
        Path::new(&self.0).is_absolute()
    }

    /// Whether the pattern walks above the project root via `..` components.
    pub fn escapes_root(&self) -> bool {
        let mut depth: i32 = 0;
        for part in self.0.split('/') {
            match part {
                ".." => {
                    depth -= 1;
                    if depth < 0 {
                        return true;
                    }
                }
                "." | "" => {}
                _ => depth += 1,
            }
        }
        false
    }
}

impl TryFrom<String> for ContentPattern {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ContentPattern::new(&value)
    }
}

impl From<ContentPattern> for String {
    fn from(pattern: ContentPattern) -> Self {
        pattern.0
    }
}

impl AsRef<str> for ContentPattern {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
