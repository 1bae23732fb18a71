//! Roman numeral parsing and validation.
//!
//! The token is read right to left. A glyph worth less than the biggest glyph
//! seen to its right is subtracted, anything else is added:
//! ```text
//! M  C  M  X  C  I  X
//! +  -  +  -  +  -  +   = 1999
//! ```
//! Strict mode additionally rejects shapes that are not legal numerals.

use crate::error::RomanNumeralError;
use crate::tables::roman_value;

/// Convert a roman numeral to its integer value.
///
/// With `validate` set, malformed numerals ("IIII", "VV", "IIX", "VX", "LC",
/// "DM", "IC", "VL") are rejected. Without it the subtractive sum is returned
/// as-is, which accepts any sequence of known glyphs.
///
/// # Examples
///
/// ```
/// use title_sort_core::roman::roman_to_int;
///
/// assert_eq!(roman_to_int("XIV", true), Ok(14));
/// assert_eq!(roman_to_int("MCMXCIX", true), Ok(1999));
/// assert!(roman_to_int("IIII", true).is_err());
/// assert_eq!(roman_to_int("IIII", false), Ok(4));
/// ```
pub fn roman_to_int(token: &str, validate: bool) -> Result<u64, RomanNumeralError> {
    if token.is_empty() {
        return Err(RomanNumeralError::Empty);
    }

    let mut total: i64 = 0;
    let mut biggest_to_the_right: u64 = 0;
    let mut previous: Option<u64> = None;
    let mut run_length = 0usize;
    let mut last_was_subtraction = false;

    for c in token.chars().rev() {
        let value = roman_value(c).ok_or(RomanNumeralError::UnknownGlyph(c))?;

        if value < biggest_to_the_right {
            if validate {
                if last_was_subtraction {
                    return Err(RomanNumeralError::RepeatedSubtraction(c));
                }
                // Only I-V, I-X, X-L, X-C, C-D, C-M style pairs: a power of
                // ten, taken from the next one or two glyphs up
                if !is_power_of_ten(value) || value * 10 < biggest_to_the_right {
                    return Err(RomanNumeralError::InvalidSubtraction {
                        glyph: c,
                        value,
                        from: biggest_to_the_right,
                    });
                }
            }
            total -= value as i64;
            last_was_subtraction = true;
        } else {
            total += value as i64;
            biggest_to_the_right = value;
            last_was_subtraction = false;
        }

        if previous == Some(value) {
            run_length += 1;
        } else {
            run_length = 1;
        }
        if validate && run_length > 1 {
            if !(value == 1 || is_power_of_ten(value)) {
                return Err(RomanNumeralError::InvalidRepeat(c));
            }
            if run_length > 3 {
                return Err(RomanNumeralError::TooManyRepeats(c));
            }
        }
        previous = Some(value);
    }

    if total <= 0 {
        return Err(RomanNumeralError::NonPositive);
    }
    Ok(total as u64)
}

fn is_power_of_ten(mut value: u64) -> bool {
    if value == 0 {
        return false;
    }
    while value % 10 == 0 {
        value /= 10;
    }
    value == 1
}

#[cfg(test)]
#[path = "tests/roman_tests.rs"]
mod tests;
