//! CLI Adapter.

use clap::{Parser, Subcommand};
use dialoguer::Confirm;

use crate::app::commands::check::CheckOptions;
use crate::app::commands::init::InitOptions;
use crate::app::commands::show::ShowFormat;
use crate::app::commands::sync::SyncOptions;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "weft")]
#[command(version)]
#[command(
    about = "Scaffold and manage the utility-CSS build configuration of a Rust web project",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a default weft.toml in the current directory
    #[clap(visible_alias = "i")]
    Init {
        /// Overwrite an existing weft.toml
        #[arg(long)]
        force: bool,
    },
    /// Validate weft.toml and report diagnostics
    #[clap(visible_alias = "c")]
    Check {
        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,
    },
    /// Print the resolved configuration
    Show {
        /// Output format
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Render tailwind.config.js from weft.toml
    #[clap(visible_alias = "s")]
    Sync {
        /// Overwrite local modifications to the emitted file
        #[arg(long)]
        force: bool,
        /// Print the rendered module without writing
        #[arg(long)]
        dry_run: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Init { force } => run_init(force).map(|_| 0),
        Commands::Check { strict } => run_check(strict),
        Commands::Show { format } => run_show(&format).map(|_| 0),
        Commands::Sync { force, dry_run } => run_sync(force, dry_run).map(|_| 0),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_init(force: bool) -> Result<(), AppError> {
    crate::init(InitOptions { force })?;
    println!("✅ Created weft.toml");
    Ok(())
}

fn run_check(strict: bool) -> Result<i32, AppError> {
    let outcome = crate::check(CheckOptions { strict })?;
    Ok(outcome.exit_code)
}

fn run_show(format: &str) -> Result<(), AppError> {
    let format = match format {
        "json" => ShowFormat::Json,
        _ => ShowFormat::Text,
    };

    let output = crate::show(format)?;
    if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
    Ok(())
}

fn run_sync(force: bool, dry_run: bool) -> Result<(), AppError> {
    let result = match crate::sync(SyncOptions { force, dry_run }) {
        Ok(result) => result,
        Err(AppError::ModifiedOutput(path)) if !force && !dry_run => {
            match confirm_overwrite(&path) {
                Some(true) => crate::sync(SyncOptions { force: true, dry_run })?,
                _ => return Err(AppError::ModifiedOutput(path)),
            }
        }
        Err(err) => return Err(err),
    };

    if result.written {
        println!("✅ Wrote {}", result.output);
    } else {
        print!("{}", result.rendered);
    }
    Ok(())
}

/// Offer an interactive overwrite confirmation.
///
/// Returns `None` when no terminal is attached (CI, piped input), so the
/// caller falls back to the hard error.
fn confirm_overwrite(path: &str) -> Option<bool> {
    Confirm::new()
        .with_prompt(format!("{} was modified locally. Overwrite?", path))
        .default(false)
        .interact_opt()
        .ok()
        .flatten()
}
