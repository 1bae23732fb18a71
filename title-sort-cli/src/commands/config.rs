use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::cli_types::NormalizerArgs;
use crate::error::CliError;
use crate::settings::{Settings, load_settings, save_settings};

/// Show the effective normalizer settings and the file they came from.
pub(crate) fn run_config_show(path: &Path, overrides: &NormalizerArgs) -> Result<(), CliError> {
    log::info!(
        "{}",
        "title-sort Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("");

    let settings = load_settings(path)?;
    let effective = Settings {
        normalizer: overrides.apply(settings.normalizer),
    };
    let rendered =
        toml::to_string_pretty(&effective).map_err(|e| CliError::config(e.to_string()))?;
    for line in rendered.lines() {
        log::info!("  {line}");
    }
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path(path: &Path) {
    println!("{}", path.display());
}

/// Write a settings file holding the defaults.
pub(crate) fn run_config_init(path: &Path, force: bool) -> Result<(), CliError> {
    if path.exists() && !force {
        return Err(CliError::config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    save_settings(path, &Settings::default())?;
    log::info!(
        "Wrote default settings to {}",
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}
