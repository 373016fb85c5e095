//! Check command: load `weft.toml` and report diagnostics.
//!
//! Errors are what the external build tool would reject outright
//! (unparseable TOML, malformed hex literals, unknown keys); warnings are
//! configurations that parse but would behave surprisingly downstream.

mod diagnostics;

use crate::app::AppContext;
use crate::domain::{AppError, CONFIG_FILE, StyleConfig, parse_config_content};
use crate::ports::{ConfigRenderer, ProjectStore};

pub use diagnostics::{Diagnostic, Diagnostics, Severity};

/// Options for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Treat warnings as failures.
    pub strict: bool,
}

/// Outcome of a check run.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub errors: usize,
    pub warnings: usize,
    pub exit_code: i32,
}

/// Execute the check command.
pub fn execute<S, R>(ctx: &AppContext<S, R>, options: CheckOptions) -> Result<CheckOutcome, AppError>
where
    S: ProjectStore,
    R: ConfigRenderer,
{
    if !ctx.store().config_exists() {
        return Err(AppError::ConfigNotFound);
    }

    let mut diagnostics = Diagnostics::default();

    let raw = ctx.store().read_file(CONFIG_FILE)?;
    match parse_config_content(&raw) {
        Ok(config) => config_checks(&config, &mut diagnostics),
        Err(err) => diagnostics.push_error(CONFIG_FILE, err.to_string()),
    }

    diagnostics.emit();

    let errors = diagnostics.error_count();
    let warnings = diagnostics.warning_count();
    let exit_code = if errors > 0 {
        1
    } else if warnings > 0 && options.strict {
        2
    } else {
        0
    };

    if errors == 0 && warnings == 0 {
        println!("All checks passed.");
    } else if errors == 0 && !options.strict {
        eprintln!("Check completed with {} warning(s).", warnings);
    } else {
        eprintln!("Check failed: {} error(s), {} warning(s) found.", errors, warnings);
    }

    Ok(CheckOutcome { errors, warnings, exit_code })
}

fn config_checks(config: &StyleConfig, diagnostics: &mut Diagnostics) {
    if config.content.is_empty() {
        diagnostics.push_warning(
            CONFIG_FILE,
            "content is empty; the build tool will find no class usage",
        );
    }

    for pattern in &config.content {
        if pattern.is_absolute() {
            diagnostics.push_warning(
                CONFIG_FILE,
                format!(
                    "content pattern '{}' is absolute; patterns resolve against the project root",
                    pattern
                ),
            );
        } else if pattern.escapes_root() {
            diagnostics.push_warning(
                CONFIG_FILE,
                format!("content pattern '{}' escapes the project root", pattern),
            );
        }
    }

    if config.theme.colors.is_empty() {
        diagnostics.push_warning(
            CONFIG_FILE,
            "theme.colors is empty; the default palette is replaced with nothing",
        );
    }

    for (value, names) in config.duplicate_color_values() {
        let names: Vec<&str> = names.iter().map(|name| name.as_str()).collect();
        diagnostics.push_warning(
            CONFIG_FILE,
            format!("colors {} share the same value {}", names.join(", "), value),
        );
    }
}
