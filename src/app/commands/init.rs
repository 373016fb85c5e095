use crate::app::AppContext;
use crate::domain::{AppError, CONFIG_FILE};
use crate::ports::{ConfigRenderer, ProjectStore};
use crate::services::assets;

/// Options for the init command.
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Overwrite an existing `weft.toml`.
    pub force: bool,
}

/// Execute the init command.
///
/// Writes the embedded default `weft.toml` at the project root.
pub fn execute<S, R>(ctx: &AppContext<S, R>, options: InitOptions) -> Result<(), AppError>
where
    S: ProjectStore,
    R: ConfigRenderer,
{
    if ctx.store().config_exists() && !options.force {
        return Err(AppError::ConfigExists);
    }

    let content = assets::default_config()?;
    ctx.store().write_file(CONFIG_FILE, &content)
}
