//! Settings file handling.
//!
//! The settings file is `~/.config/title-sort/settings.toml`:
//! ```toml
//! [normalizer]
//! articles = ["the", "a", "an"]
//! number_length = 2
//! remove_editions = false
//! ```
//! Values resolve as CLI flag > settings file > built-in default.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use title_sort_core::{NormalizerConfig, TitleNormalizer};

use crate::cli_types::NormalizerArgs;
use crate::error::CliError;

/// Contents of the settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub normalizer: NormalizerConfig,
}

/// Canonical path to the settings file: `~/.config/title-sort/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("title-sort").join("settings.toml")
}

/// The `--settings` override if given, otherwise the canonical path.
pub(crate) fn resolve_settings_path(cli_override: Option<PathBuf>) -> PathBuf {
    cli_override.unwrap_or_else(settings_path)
}

/// Read the settings file. A missing file yields the defaults.
pub(crate) fn load_settings(path: &Path) -> Result<Settings, CliError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("No settings file at {}, using defaults", path.display());
            return Ok(Settings::default());
        }
        Err(e) => return Err(e.into()),
    };
    toml::from_str(&contents).map_err(|e| CliError::config(format!("{}: {e}", path.display())))
}

/// Write settings atomically (temp file + rename).
pub(crate) fn save_settings(path: &Path, settings: &Settings) -> Result<(), CliError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(settings).map_err(|e| CliError::config(e.to_string()))?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

impl NormalizerArgs {
    /// Layer the command-line overrides on top of `config`.
    pub(crate) fn apply(&self, mut config: NormalizerConfig) -> NormalizerConfig {
        if let Some(ref articles) = self.articles {
            config.articles = articles.clone();
        }
        if let Some(number_length) = self.number_length {
            config.number_length = number_length;
        }
        if let Some(remove_editions) = self.remove_editions {
            config.remove_editions = remove_editions;
        }
        config
    }
}

/// Build the normalizer from the settings file plus command-line overrides.
pub(crate) fn build_normalizer(
    path: &Path,
    overrides: &NormalizerArgs,
) -> Result<TitleNormalizer, CliError> {
    let settings = load_settings(path)?;
    let config = overrides.apply(settings.normalizer);
    log::debug!("Normalizer config: {config:?}");
    Ok(TitleNormalizer::new(config)?)
}
