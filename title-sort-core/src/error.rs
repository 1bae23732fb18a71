use thiserror::Error;

/// Reasons a token is not accepted as a roman numeral.
///
/// These never escape [`TitleNormalizer::convert`](crate::TitleNormalizer::convert);
/// the scanner leaves the offending token as literal text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RomanNumeralError {
    /// The token has no characters
    #[error("empty token")]
    Empty,

    /// A character outside the roman numeral alphabet
    #[error("'{0}' is not a roman numeral glyph")]
    UnknownGlyph(char),

    /// A subtractive glyph directly left of another subtraction ("IIX", "VIX")
    #[error("'{0}' subtracts after another subtraction")]
    RepeatedSubtraction(char),

    /// Subtracted value is not a power of ten, or is more than one step below
    /// the value it precedes ("VX", "LC", "IC")
    #[error("'{glyph}' ({value}) cannot be subtracted from {from}")]
    InvalidSubtraction { glyph: char, value: u64, from: u64 },

    /// The same value appears more than three times in a row ("IIII")
    #[error("'{0}' repeats more than three times")]
    TooManyRepeats(char),

    /// A value that is neither one nor a power of ten is repeated ("VV")
    #[error("'{0}' cannot be repeated")]
    InvalidRepeat(char),

    /// Lenient parsing subtracted its way to zero or below
    #[error("numeral does not evaluate to a positive number")]
    NonPositive,
}

/// Errors raised while building a [`TitleNormalizer`](crate::TitleNormalizer).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Numbers are padded to between 1 and `MAX_NUMBER_LENGTH` digits
    #[error(
        "number_length must be between 1 and {max}, got {0}",
        max = crate::numerals::MAX_NUMBER_LENGTH
    )]
    InvalidNumberLength(usize),

    /// An article that is empty or only whitespace would match everything
    #[error("articles must not be empty or whitespace")]
    EmptyArticle,
}
