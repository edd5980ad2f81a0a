//! Modpack CLI - Command-line interface
//!
//! Validates, resolves and plans mod package descriptors using the
//! `modpack` library.

mod commands;
mod error;
mod output;
mod prompt;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use console::style;
use modpack::config::ConfigFile;
use modpack::plan::OverlapPolicy;

use commands::common::{load_config, ChoiceArgs};
use error::CliError;
use output::{ConsoleOutput, Output};

#[derive(Parser)]
#[command(name = "modpack")]
#[command(version, about = "Mod package descriptor tool")]
struct Cli {
    /// Configuration file (defaults to the user config directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Report every structural violation in a descriptor
    Validate {
        /// Descriptor file (.json or .xml)
        file: PathBuf,
    },

    /// Walk the configuration graph and print the selected file sets
    Resolve {
        file: PathBuf,

        #[command(flatten)]
        choices: ChoiceArgs,
    },

    /// Check require/forbid rules against installed mods
    Check {
        file: PathBuf,

        /// JSON object of installed mod ID to version
        #[arg(long, value_name = "JSON")]
        installed: PathBuf,
    },

    /// Validate, check, resolve and compile an install plan
    Plan {
        file: PathBuf,

        /// JSON object of installed mod ID to version
        #[arg(long, value_name = "JSON")]
        installed: Option<PathBuf>,

        #[command(flatten)]
        choices: ChoiceArgs,

        /// Target game the mod must support
        #[arg(long)]
        game: Option<String>,

        /// Installed game version, checked with --game
        #[arg(long, requires = "game")]
        game_version: Option<String>,

        /// Plan even when the descriptor has violations
        #[arg(long)]
        lenient: bool,

        /// Override the configured overlap policy
        #[arg(long, value_name = "POLICY")]
        overlap_policy: Option<OverlapPolicy>,
    },

    /// Re-encode a descriptor; formats are chosen by file extension
    Convert {
        input: PathBuf,
        output: PathBuf,
    },

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{} {}", style("error:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<bool, CliError> {
    let out = ConsoleOutput::new();
    let config_path = cli.config.as_deref();

    // `init` never reads the existing file.
    let config = match cli.command {
        Command::Init { .. } => ConfigFile::default(),
        _ => load_config(&out, config_path)?,
    };
    let _guard = modpack::logging::init(&config.logging, cli.verbose)?;

    dispatch(&out, &config, config_path, cli.command)
}

fn dispatch(
    out: &dyn Output,
    config: &ConfigFile,
    config_path: Option<&Path>,
    command: Command,
) -> Result<bool, CliError> {
    match command {
        Command::Validate { file } => commands::validate::run(out, &file),
        Command::Resolve { file, choices } => {
            let mut selector = choices.selector()?;
            commands::resolve::run(out, &file, &mut selector)
        }
        Command::Check { file, installed } => commands::check::run(out, &file, &installed),
        Command::Plan {
            file,
            installed,
            choices,
            game,
            game_version,
            lenient,
            overlap_policy,
        } => {
            let mut session = config.to_session_config();
            if lenient {
                session = session.with_strict(false);
            }
            if let Some(policy) = overlap_policy {
                session = session.with_overlap_policy(policy);
            }
            if let Some(game) = game {
                session = session.with_game(game);
            }
            if let Some(version) = game_version {
                session = session.with_game_version(version);
            }

            let mut selector = choices.selector()?;
            commands::plan::run(out, session, &file, installed.as_deref(), &mut selector)
        }
        Command::Convert { input, output } => commands::convert::run(out, &input, &output),
        Command::Init { force } => commands::init::run(out, config_path, force),
    }
}
