//! title-sort CLI
//!
//! Command-line interface for turning game titles into sortable keys.

mod cli_types;
mod commands;
mod error;
mod logging;
mod settings;

use std::process::ExitCode;

use clap::Parser;

use crate::cli_types::{Cli, Commands, ConfigAction};
use crate::error::CliError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.quiet, cli.verbose);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            log::error!("{e}");
            ExitCode::from(2)
        }
    }
}

/// Dispatch a command. `Ok(false)` means the command ran but reported a
/// negative result (titles differ, numeral invalid).
fn run(cli: Cli) -> Result<bool, CliError> {
    let settings_path = settings::resolve_settings_path(cli.settings);

    match cli.command {
        Commands::Convert { titles, json } => {
            let normalizer = settings::build_normalizer(&settings_path, &cli.normalizer)?;
            commands::convert::run_convert(&normalizer, titles, json)?;
            Ok(true)
        }
        Commands::Sort { file, show_keys } => {
            let normalizer = settings::build_normalizer(&settings_path, &cli.normalizer)?;
            commands::sort::run_sort(&normalizer, file, show_keys)?;
            Ok(true)
        }
        Commands::Match { first, second } => {
            let normalizer = settings::build_normalizer(&settings_path, &cli.normalizer)?;
            Ok(commands::compare::run_match(&normalizer, &first, &second))
        }
        Commands::Roman { token, lenient } => Ok(commands::roman::run_roman(&token, lenient)),
        Commands::Config { action } => {
            match action {
                ConfigAction::Show => {
                    commands::config::run_config_show(&settings_path, &cli.normalizer)?
                }
                ConfigAction::Path => commands::config::run_config_path(&settings_path),
                ConfigAction::Init { force } => {
                    commands::config::run_config_init(&settings_path, force)?
                }
            }
            Ok(true)
        }
    }
}
