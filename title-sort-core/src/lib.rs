//! Sortable game titles.
//!
//! Turns display titles into keys that sort the way people expect:
//! "Final Fantasy X" becomes "Final Fantasy 10" and lands after
//! "Final Fantasy 09" instead of after "Final Fantasy Z". Leading articles
//! are dropped and a trailing edition phrase is split off before numerals
//! are rewritten.
//!
//! Everything here is pure string processing with no I/O; the only state is
//! the [`NormalizerConfig`] held by a [`TitleNormalizer`].

pub mod articles;
pub mod edition;
pub mod error;
pub mod matching;
pub mod normalizer;
pub mod numerals;
pub mod roman;
pub mod tables;

pub use articles::strip_articles;
pub use edition::{EditionSplit, split_edition};
pub use error::{ConfigError, RomanNumeralError};
pub use matching::sort_by_title;
pub use normalizer::{NormalizerConfig, TitleNormalizer};
pub use numerals::{
    MAX_NUMBER_LENGTH, NumeralKind, NumeralSpan, find_numerals, rewrite_numerals,
};
pub use roman::roman_to_int;
pub use tables::is_excluded_numeral;
