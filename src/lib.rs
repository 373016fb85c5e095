//! weft: scaffold and manage the utility-CSS build configuration of a Rust
//! web project.
//!
//! The source of truth is `weft.toml` at the project root (content globs,
//! theme color palette, plugin descriptors). `weft sync` emits the
//! `tailwind.config.js` module the external build tool consumes, guarding
//! local edits with a hash manifest.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use adapters::{FilesystemProjectStore, JsConfigRenderer};
use app::AppContext;
use app::commands::{check, init, show, sync};

pub use app::commands::check::{CheckOptions, CheckOutcome};
pub use app::commands::init::InitOptions;
pub use app::commands::show::ShowFormat;
pub use app::commands::sync::{SyncOptions, SyncResult};
pub use domain::{AppError, StyleConfig};

fn context() -> Result<AppContext<FilesystemProjectStore, JsConfigRenderer>, AppError> {
    let store = FilesystemProjectStore::current()?;
    Ok(AppContext::new(store, JsConfigRenderer::new()))
}

/// Scaffold a default `weft.toml` in the current directory.
pub fn init(options: InitOptions) -> Result<(), AppError> {
    init::execute(&context()?, options)
}

/// Validate `weft.toml` in the current directory and report diagnostics.
pub fn check(options: CheckOptions) -> Result<CheckOutcome, AppError> {
    check::execute(&context()?, options)
}

/// Render the resolved configuration as text or JSON.
pub fn show(format: ShowFormat) -> Result<String, AppError> {
    show::execute(&context()?, format)
}

/// Render `tailwind.config.js` from `weft.toml` and write it.
pub fn sync(options: SyncOptions) -> Result<SyncResult, AppError> {
    sync::execute(&context()?, options)
}
