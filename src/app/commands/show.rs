use crate::app::AppContext;
use crate::domain::{AppError, CONFIG_FILE, parse_config_content};
use crate::ports::{ConfigRenderer, ProjectStore};

/// Output format for the show command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShowFormat {
    /// Resolved configuration as TOML.
    #[default]
    Text,
    /// Resolved configuration as JSON, for machine consumption.
    Json,
}

/// Execute the show command.
///
/// Returns the resolved configuration (defaults applied) in the requested
/// format.
pub fn execute<S, R>(ctx: &AppContext<S, R>, format: ShowFormat) -> Result<String, AppError>
where
    S: ProjectStore,
    R: ConfigRenderer,
{
    if !ctx.store().config_exists() {
        return Err(AppError::ConfigNotFound);
    }

    let raw = ctx.store().read_file(CONFIG_FILE)?;
    let config = parse_config_content(&raw)?;

    match format {
        ShowFormat::Text => config.to_toml_string(),
        ShowFormat::Json => serde_json::to_string_pretty(&config).map_err(|err| {
            AppError::config_error(format!("Failed to serialize configuration as JSON: {}", err))
        }),
    }
}
