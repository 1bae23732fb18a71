//! The sortable title pipeline: articles → edition phrase → numerals.

use serde::{Deserialize, Serialize};

use crate::articles::strip_articles;
use crate::edition::split_edition;
use crate::error::ConfigError;
use crate::numerals::{MAX_NUMBER_LENGTH, rewrite_numerals};

/// Settings for a [`TitleNormalizer`].
///
/// Every field has a default, so a partial `[normalizer]` table in a
/// settings file is enough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Articles removed from the start (or ", article" from the end) of a title.
    pub articles: Vec<String>,
    /// Minimum number of digits for rewritten numbers.
    pub number_length: usize,
    /// Drop the edition phrase instead of putting it back.
    pub remove_editions: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            articles: vec!["the".to_string(), "a".to_string(), "an".to_string()],
            number_length: 2,
            remove_editions: false,
        }
    }
}

impl NormalizerConfig {
    pub fn with_articles<I, S>(mut self, articles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.articles = articles.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_number_length(mut self, number_length: usize) -> Self {
        self.number_length = number_length;
        self
    }

    pub fn with_remove_editions(mut self, remove_editions: bool) -> Self {
        self.remove_editions = remove_editions;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.number_length == 0 || self.number_length > MAX_NUMBER_LENGTH {
            return Err(ConfigError::InvalidNumberLength(self.number_length));
        }
        if self.articles.iter().any(|a| a.trim().is_empty()) {
            return Err(ConfigError::EmptyArticle);
        }
        Ok(())
    }
}

/// Converts game titles into keys that sort naturally.
///
/// The normalizer holds nothing but its configuration, so one instance can be
/// shared freely between threads.
///
/// # Examples
///
/// ```
/// use title_sort_core::TitleNormalizer;
///
/// let normalizer = TitleNormalizer::default();
/// assert_eq!(normalizer.convert("Final Fantasy X"), "Final Fantasy 10");
/// assert_eq!(normalizer.convert("The Legend of Zelda"), "Legend of Zelda");
/// assert_eq!(
///     normalizer.convert("Dragon Quest XI S - Definitive Edition"),
///     "Dragon Quest 11 S - Definitive Edition"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct TitleNormalizer {
    config: NormalizerConfig,
}

impl TitleNormalizer {
    /// Build a normalizer, rejecting an out-of-range `number_length` or blank
    /// articles.
    pub fn new(config: NormalizerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Convert a title into its sortable form.
    ///
    /// Blank input comes back unchanged. Ambiguous or malformed numerals are
    /// left as they are; this never fails.
    pub fn convert(&self, title: &str) -> String {
        if title.trim().is_empty() {
            return title.to_string();
        }

        let stripped = strip_articles(title, &self.config.articles);
        let (head, suffix) = match split_edition(stripped) {
            Some(split) => (split.head, split.suffix),
            None => (stripped, ""),
        };

        let mut sortable = rewrite_numerals(head, self.config.number_length);
        if !self.config.remove_editions {
            sortable.push_str(suffix);
        }
        sortable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = NormalizerConfig::default();
        assert_eq!(config.articles, vec!["the", "a", "an"]);
        assert_eq!(config.number_length, 2);
        assert!(!config.remove_editions);
    }

    #[test]
    fn rejects_zero_number_length() {
        let config = NormalizerConfig::default().with_number_length(0);
        assert_eq!(
            TitleNormalizer::new(config).unwrap_err(),
            ConfigError::InvalidNumberLength(0)
        );
    }

    #[test]
    fn rejects_oversized_number_length() {
        for width in [MAX_NUMBER_LENGTH + 1, 70_000, usize::MAX] {
            let config = NormalizerConfig::default().with_number_length(width);
            assert_eq!(
                TitleNormalizer::new(config).unwrap_err(),
                ConfigError::InvalidNumberLength(width)
            );
        }
    }

    #[test]
    fn widest_number_length_converts() {
        let config = NormalizerConfig::default().with_number_length(MAX_NUMBER_LENGTH);
        let normalizer = TitleNormalizer::new(config).unwrap();
        let converted = normalizer.convert("Mega Man 2");
        assert_eq!(
            converted,
            format!("Mega Man {}2", "0".repeat(MAX_NUMBER_LENGTH - 1))
        );
    }

    #[test]
    fn rejects_blank_articles() {
        let config = NormalizerConfig::default().with_articles(["the", " "]);
        assert_eq!(
            TitleNormalizer::new(config).unwrap_err(),
            ConfigError::EmptyArticle
        );
    }

    #[test]
    fn blank_input_is_returned_unchanged() {
        let normalizer = TitleNormalizer::default();
        assert_eq!(normalizer.convert(""), "");
        assert_eq!(normalizer.convert("   "), "   ");
    }

    #[test]
    fn remove_editions_drops_the_suffix() {
        let config = NormalizerConfig::default().with_remove_editions(true);
        let normalizer = TitleNormalizer::new(config).unwrap();
        assert_eq!(
            normalizer.convert("Dragon Quest XI S - Definitive Edition"),
            "Dragon Quest 11 S"
        );
    }

    #[test]
    fn config_deserializes_partial_tables() {
        let config: NormalizerConfig = toml::from_str("number_length = 3").unwrap();
        assert_eq!(config.number_length, 3);
        assert_eq!(config.articles, vec!["the", "a", "an"]);
        assert!(!config.remove_editions);
    }
}
