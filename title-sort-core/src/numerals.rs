//! Numeral scanner: finds roman numerals, digit runs and number words in a
//! title and rewrites them as zero-padded decimals.
//!
//! The scan is a single left-to-right pass over the immutable input that
//! produces replacement spans; gating decisions always look at the original
//! text, never at partially rewritten output.
//!
//! A candidate token must start after a non-word character other than `.`
//! and must not be followed by a word character or `.`, so abbreviations
//! like "S.T.A.L.K.E.R." and words like "Vice" or "Xbox" are never touched.

use crate::roman::roman_to_int;
use crate::tables::{is_excluded_numeral, is_roman_glyph, number_word_value};

/// How far back (in characters) to look for a "chapter"-style word.
const CONTEXT_WINDOW: usize = 9;

/// Words that announce a number even in the middle of a title.
const CONTEXT_WORDS: &[&str] = &["chapter", "season", "episode"];

/// Characters that turn a preceding "I" into the start of a range or list
/// ("Part I-III", "I & II").
const RANGE_CONNECTORS: &[char] = &['-', '+', '&'];

/// A lone "I" is a number only at the very end of the title.
const MAX_I_DISTANCE_FROM_END: usize = 0;

/// A lone "X" may still be followed by a short tail ("Mega Man X-2").
const MAX_X_DISTANCE_FROM_END: usize = 4;

/// Number words convert only at the very end of the title.
const MAX_WORD_DISTANCE_FROM_END: usize = 0;

/// The kind of token a replacement was made for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumeralKind {
    /// Roman numeral run, e.g. "XIV" or "Ⅻ"
    Roman,
    /// ASCII digit run, e.g. "2" or "1999"
    Arabic,
    /// Spelled-out number, e.g. "Two"
    Word,
}

/// A token that will be replaced by its padded decimal value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumeralSpan {
    /// Byte offset of the token start in the scanned text.
    pub start: usize,
    /// Byte offset one past the token end.
    pub end: usize,
    pub kind: NumeralKind,
    /// Numeric value of the token.
    pub value: u64,
    /// Text that replaces the token.
    pub replacement: String,
}

/// Widest padding a normalizer accepts. `u64::MAX` has 20 digits.
pub const MAX_NUMBER_LENGTH: usize = 32;

/// Left-pad `value` with zeros to at least `width` digits. Never truncates.
///
/// `width` is clamped to [`MAX_NUMBER_LENGTH`].
pub fn pad_number(value: u64, width: usize) -> String {
    let digits = value.to_string();
    let zeros = width.min(MAX_NUMBER_LENGTH).saturating_sub(digits.len());
    let mut padded = "0".repeat(zeros);
    padded.push_str(&digits);
    padded
}

/// Find every numeral token that should be rewritten, in order.
pub fn find_numerals(text: &str, number_length: usize) -> Vec<NumeralSpan> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let scanner = Scanner { text, chars: &chars };
    let mut spans = Vec::new();

    let mut i = 0;
    while i < chars.len() {
        if i > 0 && blocks_token_start(chars[i - 1].1) {
            i += 1;
            continue;
        }
        match scanner.candidate_at(i) {
            Some(candidate) => {
                if let Some(value) = scanner.evaluate(&candidate) {
                    spans.push(NumeralSpan {
                        start: scanner.byte_offset(candidate.start),
                        end: scanner.byte_offset(candidate.end),
                        kind: candidate.kind,
                        value,
                        replacement: pad_number(value, number_length),
                    });
                }
                i = candidate.end;
            }
            None => i += 1,
        }
    }

    spans
}

/// Rewrite every qualifying numeral in `text`, leaving everything else as-is.
///
/// # Examples
///
/// ```
/// use title_sort_core::numerals::rewrite_numerals;
///
/// assert_eq!(rewrite_numerals("Final Fantasy X", 2), "Final Fantasy 10");
/// assert_eq!(rewrite_numerals("Part I-III", 2), "Part 01-03");
/// assert_eq!(rewrite_numerals("I Am Setsuna", 2), "I Am Setsuna");
/// ```
pub fn rewrite_numerals(text: &str, number_length: usize) -> String {
    let spans = find_numerals(text, number_length);
    if spans.is_empty() {
        return text.to_string();
    }

    let width = number_length.min(MAX_NUMBER_LENGTH);
    let mut out = String::with_capacity(text.len() + spans.len() * width);
    let mut cursor = 0;
    for span in &spans {
        out.push_str(&text[cursor..span.start]);
        out.push_str(&span.replacement);
        cursor = span.end;
    }
    out.push_str(&text[cursor..]);
    out
}

/// `\w` in the regex sense: letters, digits (including letter-like numerals
/// such as `Ⅻ`) and underscore.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// A token may not start right after a word character or a dot.
fn blocks_token_start(c: char) -> bool {
    is_word_char(c) || c == '.'
}

/// Candidate token, in character indices.
#[derive(Debug)]
struct Candidate {
    start: usize,
    end: usize,
    kind: NumeralKind,
}

struct Scanner<'a> {
    text: &'a str,
    chars: &'a [(usize, char)],
}

impl Scanner<'_> {
    fn byte_offset(&self, index: usize) -> usize {
        self.chars.get(index).map_or(self.text.len(), |&(b, _)| b)
    }

    fn slice(&self, start: usize, end: usize) -> &str {
        &self.text[self.byte_offset(start)..self.byte_offset(end)]
    }

    /// End of the run of characters starting at `start` that satisfy `pred`.
    fn run_end(&self, start: usize, pred: impl Fn(char) -> bool) -> usize {
        let mut end = start;
        while end < self.chars.len() && pred(self.chars[end].1) {
            end += 1;
        }
        end
    }

    fn ends_at_boundary(&self, end: usize) -> bool {
        match self.chars.get(end) {
            None => true,
            Some(&(_, c)) => !blocks_token_start(c),
        }
    }

    /// Try each token class in priority order at `start`.
    fn candidate_at(&self, start: usize) -> Option<Candidate> {
        let classes: [(NumeralKind, fn(char) -> bool); 3] = [
            (NumeralKind::Roman, is_roman_glyph),
            (NumeralKind::Arabic, |c: char| c.is_ascii_digit()),
            (NumeralKind::Word, char::is_alphabetic),
        ];

        for (kind, pred) in classes {
            let end = self.run_end(start, pred);
            if end == start || !self.ends_at_boundary(end) {
                continue;
            }
            if kind == NumeralKind::Word && number_word_value(self.slice(start, end)).is_none() {
                continue;
            }
            return Some(Candidate { start, end, kind });
        }
        None
    }

    /// Decide whether a candidate converts, returning its value if it does.
    fn evaluate(&self, candidate: &Candidate) -> Option<u64> {
        let token = self.slice(candidate.start, candidate.end);
        let result = match candidate.kind {
            NumeralKind::Roman => self.evaluate_roman(token, candidate),
            NumeralKind::Arabic => token
                .parse::<u64>()
                .map_err(|e| format!("not a usable number: {e}")),
            NumeralKind::Word => {
                if self.context_gate(candidate, MAX_WORD_DISTANCE_FROM_END) {
                    number_word_value(token).ok_or_else(|| "unknown number word".to_string())
                } else {
                    Err("number word outside chapter/end context".to_string())
                }
            }
        };

        match result {
            Ok(value) => Some(value),
            Err(reason) => {
                log::trace!("Leaving '{token}' as text: {reason}");
                None
            }
        }
    }

    fn evaluate_roman(&self, token: &str, candidate: &Candidate) -> Result<u64, String> {
        match token {
            "I" => {
                if self.context_gate(candidate, MAX_I_DISTANCE_FROM_END)
                    || self.starts_range(candidate.end)
                {
                    Ok(1)
                } else {
                    Err("lone 'I' outside chapter/end/range context".to_string())
                }
            }
            "X" => {
                if !self.context_gate(candidate, MAX_X_DISTANCE_FROM_END) {
                    Err("lone 'X' outside chapter/end context".to_string())
                } else if self.dash_word_is_not_numeral(candidate.end) {
                    Err("lone 'X' hyphenated to a word".to_string())
                } else {
                    Ok(10)
                }
            }
            _ if is_excluded_numeral(token) => Err("excluded numeral".to_string()),
            _ => roman_to_int(token, true).map_err(|e| e.to_string()),
        }
    }

    /// True when the token follows a chapter/season/episode word, or ends no
    /// more than `max_distance_from_end` characters before the end of the text.
    fn context_gate(&self, candidate: &Candidate, max_distance_from_end: usize) -> bool {
        self.chars.len() - candidate.end <= max_distance_from_end
            || self.follows_context_word(candidate.start)
    }

    fn follows_context_word(&self, start: usize) -> bool {
        let window_start = start.saturating_sub(CONTEXT_WINDOW);

        let mut word_end = start;
        while word_end > window_start && !is_word_char(self.chars[word_end - 1].1) {
            word_end -= 1;
        }
        let mut word_start = word_end;
        while word_start > window_start && is_word_char(self.chars[word_start - 1].1) {
            word_start -= 1;
        }
        if word_start == word_end {
            return false;
        }
        // Must be the whole word, not the tail of a longer one
        if word_start > 0 && is_word_char(self.chars[word_start - 1].1) {
            return false;
        }

        let word = self.slice(word_start, word_end);
        CONTEXT_WORDS.iter().any(|w| w.eq_ignore_ascii_case(word))
    }

    /// Next non-whitespace character after `end` is a range/list connector.
    fn starts_range(&self, end: usize) -> bool {
        self.chars[end..]
            .iter()
            .map(|&(_, c)| c)
            .find(|c| !c.is_whitespace())
            .is_some_and(|c| RANGE_CONNECTORS.contains(&c))
    }

    /// "X-Men": the token is followed by a dash and a word that is not itself
    /// a usable roman numeral. "X-2" and "X-II" do not count.
    fn dash_word_is_not_numeral(&self, end: usize) -> bool {
        if self.chars.get(end).map(|&(_, c)| c) != Some('-') {
            return false;
        }
        let word_end = self.run_end(end + 1, char::is_alphabetic);
        if word_end == end + 1 {
            return false;
        }
        let word = self.slice(end + 1, word_end);
        match roman_to_int(word, true) {
            Ok(_) => is_excluded_numeral(word),
            Err(_) => true,
        }
    }
}

#[cfg(test)]
#[path = "tests/numerals_tests.rs"]
mod tests;
