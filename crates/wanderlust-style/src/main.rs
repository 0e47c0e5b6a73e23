//! Wanderlust style checker - build-time validation of design tokens.
//!
//! # Usage
//!
//! ```bash
//! # Verify tokens resolve and content globs cover every file using them.
//! # The default globs are relative to the UI crate, so scan from there.
//! wanderlust-style check --root crates/wanderlust-ui
//!
//! # Check against a hand-written host stylesheet instead of the palette
//! wanderlust-style check --root crates/wanderlust-ui --stylesheet theme.css
//!
//! # Print the generated custom properties, token classes and utilities
//! wanderlust-style css --media
//!
//! # Write the default configuration
//! wanderlust-style init
//! ```

mod commands;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{Level, error};
use wanderlust_core::DarkMode;

use crate::commands::CliResult;
use crate::logging::LoggingConfig;

/// Design token checker for the Wanderlust AI front-end.
#[derive(Parser)]
#[command(name = "wanderlust-style", version, about)]
struct Cli {
    /// Style configuration file (default: wanderlust.style.json under the root)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Also write JSON logs to the platform data directory
    #[arg(long, global = true)]
    log_file: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check that every token resolves and content globs cover token usage
    Check {
        /// Project root to scan for token usage
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Host stylesheet defining the custom properties (default: generated palette)
        #[arg(short, long)]
        stylesheet: Option<PathBuf>,

        /// Skip the content coverage scan
        #[arg(long)]
        no_scan: bool,

        /// Fail when files use tokens outside the content list
        #[arg(long)]
        strict: bool,
    },
    /// Print the palette custom properties, token classes and utility classes
    Css {
        /// Emit the dark palette under prefers-color-scheme instead of the configured strategy
        #[arg(long)]
        media: bool,
    },
    /// Print every token with its resolved value
    Tokens {
        /// Host stylesheet defining the custom properties (default: generated palette)
        #[arg(short, long)]
        stylesheet: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = if cli.verbose {
        LoggingConfig::verbose()
    } else if cli.quiet {
        LoggingConfig::default().with_console_level(Level::ERROR)
    } else {
        LoggingConfig::default()
    };
    if cli.log_file {
        logging = logging.with_log_directory(logging::default_log_directory());
    }
    let _guard = match logging::init(&logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<String> {
    let cwd = PathBuf::from(".");

    match cli.command {
        Command::Check {
            root,
            stylesheet,
            no_scan,
            strict,
        } => {
            let config = commands::load_config(cli.config.as_deref(), &root)?;
            let sheet = commands::load_stylesheet(stylesheet.as_deref(), &config)?;
            let scan_root = (!no_scan).then_some(root.as_path());
            let outcome = commands::check(&config, &sheet, scan_root, strict)?;
            Ok(outcome.summary())
        }
        Command::Css { media } => {
            let config = commands::load_config(cli.config.as_deref(), &cwd)?;
            Ok(commands::css(&config, media.then_some(DarkMode::Media)))
        }
        Command::Tokens { stylesheet, json } => {
            let config = commands::load_config(cli.config.as_deref(), &cwd)?;
            let sheet = commands::load_stylesheet(stylesheet.as_deref(), &config)?;
            let mut output = commands::tokens(&config, &sheet, json)?;
            if json {
                output.push('\n');
            }
            Ok(output)
        }
        Command::Init { force } => {
            let path = cli
                .config
                .unwrap_or_else(|| wanderlust_core::StyleConfig::default_path(&cwd));
            commands::init(&path, force)?;
            Ok(format!("wrote {}\n", path.display()))
        }
    }
}
