//! Console entry point for the rcat recipe catalog.
//!
//! # Usage
//!
//! ```bash
//! rcat [OPTIONS] [COMMAND]
//!
//! # Interactive menu (default)
//! rcat --file recipes.json
//!
//! # Print every country and its dishes
//! rcat list
//!
//! # Print one recipe
//! rcat show Japanese Sushi
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

mod error;
mod menu;
mod output;
mod prompt;

use std::io::Write;

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use rcat_core::{Config, LoadOutcome, RecipeManager};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::menu::{Menu, SaveTarget, SessionEnd};
use crate::prompt::Prompter;

// =============================================================================
// CLI ARGUMENT TYPES
// =============================================================================

/// Recipe catalog grouped by country of origin.
#[derive(Parser)]
#[command(name = "rcat", version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Command to execute. Defaults to the interactive menu.
    #[command(subcommand)]
    command: Option<Commands>,

    /// Catalog file to load and save.
    ///
    /// Overrides `storage.data_file` from the configuration file.
    #[arg(short, long, global = true, env = "RCAT_FILE")]
    file: Option<Utf8PathBuf>,

    /// JSON configuration file.
    #[arg(short, long, global = true, env = "RCAT_CONFIG")]
    config: Option<Utf8PathBuf>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Add, view, update and delete dishes from a menu.
    Interactive,

    /// Print every country and its dishes.
    List,

    /// Print one recipe.
    Show {
        /// Country of origin.
        country: String,

        /// Dish name.
        dish: String,
    },
}

// =============================================================================
// INITIALIZATION FUNCTIONS
// =============================================================================

/// Initializes the tracing subscriber for logging.
///
/// Respects `RUST_LOG` if set. Otherwise uses `debug` with `--verbose` and
/// `warn` by default. Logs go to stderr so they stay out of the menu.
fn init_tracing(verbose: bool, no_color: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "warn" };
        EnvFilter::new(level)
    });

    let use_ansi = !no_color && std::env::var("NO_COLOR").is_err();

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(use_ansi)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

/// Builds a [`Config`] from the optional config file and CLI overrides.
fn build_config(cli: &Cli) -> color_eyre::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)
            .map_err(|e| color_eyre::eyre::eyre!("Failed to load config {}: {}", path, e))?,
        None => Config::default(),
    };

    if let Some(file) = &cli.file {
        config.storage.data_file.clone_from(file);
    }
    config.validate()?;

    Ok(config)
}

// =============================================================================
// COMMAND IMPLEMENTATIONS
// =============================================================================

/// Runs the interactive menu on stdin/stdout.
///
/// A catalog that fails to load is reported and the session starts empty.
/// Saving over that file then needs an explicit confirmation.
fn run_interactive(config: &Config) -> color_eyre::Result<()> {
    let path = config.storage.data_file.as_path();
    let mut manager = RecipeManager::new();

    let load_failed = match manager.load_from_file(path) {
        Ok(outcome) => {
            log_outcome(path.as_str(), outcome);
            false
        }
        Err(err) => {
            warn!(error = %err, "starting with an empty catalog");
            let stderr = std::io::stderr();
            let mut handle = stderr.lock();
            writeln!(handle, "Error loading dishes from file: {err}")?;
            true
        }
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let prompter = Prompter::new(stdin.lock(), stdout.lock(), config.prompt.done_sentinel.as_str());
    let target = SaveTarget {
        path,
        indent: config.storage.indent,
        confirm_overwrite: load_failed,
    };

    match Menu::new(&mut manager, prompter, target).run()? {
        SessionEnd::Saved => info!(%path, "session ended after save"),
        SessionEnd::InputClosed => warn!(%path, "input closed, catalog not saved"),
    }
    Ok(())
}

/// Prints every country and its dishes.
fn run_list(config: &Config) -> color_eyre::Result<()> {
    let manager = open_catalog(config)?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    output::write_catalog(&mut handle, &manager)?;
    Ok(())
}

/// Prints one recipe, failing if it does not exist.
fn run_show(config: &Config, country: &str, dish: &str) -> color_eyre::Result<()> {
    let manager = open_catalog(config)?;
    let recipe = manager
        .view_recipe(country, dish)
        .ok_or_else(|| color_eyre::eyre::eyre!("Dish not found: {} ({})", dish, country))?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    output::write_recipe(&mut handle, recipe)?;
    Ok(())
}

/// Loads the configured catalog for a read-only command.
fn open_catalog(config: &Config) -> color_eyre::Result<RecipeManager> {
    let path = config.storage.data_file.as_path();
    let (manager, outcome) = RecipeManager::open(path)?;
    log_outcome(path.as_str(), outcome);
    Ok(manager)
}

fn log_outcome(path: &str, outcome: LoadOutcome) {
    if outcome.is_seeded() {
        info!(path, recipes = outcome.count(), "no catalog file, using built-in recipes");
    } else {
        info!(path, recipes = outcome.count(), "catalog loaded");
    }
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Application entry point.
fn main() -> color_eyre::Result<()> {
    // 1. Install color-eyre FIRST (before any potential panics)
    color_eyre::install()?;

    // 2. Parse CLI arguments
    let cli = Cli::parse();

    // 3. Initialize tracing
    init_tracing(cli.verbose, cli.no_color);

    // 4. Route to the selected command
    let config = build_config(&cli)?;
    match &cli.command {
        None | Some(Commands::Interactive) => run_interactive(&config),
        Some(Commands::List) => run_list(&config),
        Some(Commands::Show { country, dish }) => run_show(&config, country, dish),
    }
}
