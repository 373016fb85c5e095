//! Sync command: render `tailwind.config.js` from `weft.toml` and write it.

use crate::app::AppContext;
use crate::domain::{AppError, CONFIG_FILE, OUTPUT_FILE, parse_config_content};
use crate::ports::{ConfigRenderer, ProjectStore};
use crate::services::managed_outputs;

/// Options for the sync command.
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// Overwrite local modifications to the emitted file.
    pub force: bool,
    /// Render without writing.
    pub dry_run: bool,
}

/// Result of a sync operation.
#[derive(Debug, Clone)]
pub struct SyncResult {
    /// Project-relative path of the emitted file.
    pub output: String,
    /// Rendered module content.
    pub rendered: String,
    /// Whether the file was written.
    pub written: bool,
}

/// Execute the sync command.
///
/// An existing `tailwind.config.js` is only overwritten when its hash
/// matches the manifest entry recorded at the previous sync. A mismatch,
/// or a file weft never wrote, means local edits, and the write is
/// refused without `force`.
pub fn execute<S, R>(ctx: &AppContext<S, R>, options: SyncOptions) -> Result<SyncResult, AppError>
where
    S: ProjectStore,
    R: ConfigRenderer,
{
    if !ctx.store().config_exists() {
        return Err(AppError::ConfigNotFound);
    }

    let raw = ctx.store().read_file(CONFIG_FILE)?;
    let config = parse_config_content(&raw)?;
    let rendered = ctx.renderer().render_js_config(&config)?;

    if options.dry_run {
        return Ok(SyncResult { output: OUTPUT_FILE.to_string(), rendered, written: false });
    }

    if ctx.store().file_exists(OUTPUT_FILE) && !options.force {
        let current = ctx.store().read_file(OUTPUT_FILE)?;
        let recorded = managed_outputs::recorded_hash(ctx.store(), OUTPUT_FILE)?;
        match recorded {
            Some(hash) if hash == managed_outputs::hash_content(&current) => {}
            _ => return Err(AppError::ModifiedOutput(OUTPUT_FILE.to_string())),
        }
    }

    ctx.store().write_file(OUTPUT_FILE, &rendered)?;
    managed_outputs::record(ctx.store(), OUTPUT_FILE, &rendered)?;

    Ok(SyncResult { output: OUTPUT_FILE.to_string(), rendered, written: true })
}
