//! Trailing edition phrase detection.
//!
//! Titles often carry a release qualifier at the end:
//! ```text
//! Dragon Quest XI S - Definitive Edition
//! Skyrim Special Edition
//! Bioshock Remastered Collection
//! Fallout 3 [(Game of the Year Edition)]
//! ```
//! The phrase is one or more edition segments, each optionally introduced by a
//! dash or colon, and the whole phrase may be wrapped in balanced `(...)` /
//! `[...]` pairs. Matching works right to left from the end of the title.

/// Multi-word vocabulary terms that qualify as a segment on their own, and as
/// the qualifier in front of "edition"/"cut".
const EDITION_TERMS: &[&[&str]] = &[
    &["game", "of", "the", "year"],
    &["deluxe"],
    &["hd"],
    &["collection"],
    &["remaster"],
    &["remastered"],
    &["remake"],
    &["ultimate"],
    &["anthology"],
    &["goty"],
    &["enhanced"],
    &["ce"],
];

/// Words that turn the word before them into a segment ("Director's Cut").
const EDITION_NOUNS: &[&str] = &["edition", "cut"];

/// Separators that may introduce a segment.
const SEPARATORS: &[char] = &['-', ':', '‒', '–', '—', '―'];

/// A title split into the part before its edition phrase and the phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditionSplit<'a> {
    /// Title without the edition phrase, trailing whitespace removed.
    pub head: &'a str,
    /// Removed text, verbatim: `head` + `suffix` is the original title.
    pub suffix: &'a str,
}

/// Split a trailing edition phrase off `title`.
///
/// Returns `None` when the title has no edition phrase, when the phrase's
/// brackets do not balance, or when nothing would be left of the title.
///
/// # Examples
///
/// ```
/// use title_sort_core::edition::split_edition;
///
/// let split = split_edition("Dragon Quest XI S - Definitive Edition").unwrap();
/// assert_eq!(split.head, "Dragon Quest XI S");
/// assert_eq!(split.suffix, " - Definitive Edition");
///
/// assert!(split_edition("Super Mario World").is_none());
/// ```
pub fn split_edition(title: &str) -> Option<EditionSplit<'_>> {
    let body = title.trim_end();
    let head = phrase_starts(body)
        .into_iter()
        .map(|start| body[..start].trim_end())
        .filter(|head| !head.trim_start().is_empty())
        .last()?;

    let split = EditionSplit {
        head,
        suffix: &title[head.len()..],
    };
    log::debug!("Split edition phrase {:?} from {:?}", split.suffix, split.head);
    Some(split)
}

/// Candidate phrase start offsets, from the shortest phrase to the longest.
fn phrase_starts(body: &str) -> Vec<usize> {
    if body.ends_with([')', ']']) {
        return bracketed_phrase_start(body).into_iter().collect();
    }
    segment_starts(body)
}

/// Start of a bracket-wrapped phrase ending at the end of `body`.
fn bracketed_phrase_start(body: &str) -> Option<usize> {
    let open = matching_open(body)?;
    // A stray opener right before the match means the nesting never closes
    if body[..open].trim_end().ends_with(['(', '[']) {
        return None;
    }
    let inner = &body[open + 1..body.len() - 1];
    if !is_whole_phrase(inner) {
        return None;
    }
    Some(extend_over_separator(body, open))
}

/// True if all of `text` is an edition phrase (possibly wrapped again).
fn is_whole_phrase(text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() {
        return false;
    }
    if text.ends_with([')', ']']) {
        return matching_open(text).is_some_and(|open| {
            text[..open].trim().is_empty() && is_whole_phrase(&text[open + 1..text.len() - 1])
        });
    }
    segment_starts(text).last() == Some(&0)
}

/// Byte offset of the opener matching the closing bracket at the end of `s`.
///
/// Nesting is tracked with a stack, so mixed pairs like `[(...)]` work and
/// mismatched ones like `[...)` fail.
fn matching_open(s: &str) -> Option<usize> {
    let mut expected: Vec<char> = Vec::new();
    for (i, c) in s.char_indices().rev() {
        match c {
            ')' => expected.push('('),
            ']' => expected.push('['),
            '(' | '[' => {
                if expected.pop()? != c {
                    return None;
                }
                if expected.is_empty() {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

#[derive(Debug)]
struct Word {
    start: usize,
    end: usize,
    lower: String,
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '\'' || c == '’'
}

fn words(text: &str) -> Vec<Word> {
    let mut words = Vec::new();
    let mut current: Option<usize> = None;
    for (i, c) in text.char_indices() {
        match (is_word_char(c), current) {
            (true, None) => current = Some(i),
            (false, Some(start)) => {
                words.push(Word {
                    start,
                    end: i,
                    lower: text[start..i].to_lowercase(),
                });
                current = None;
            }
            _ => {}
        }
    }
    if let Some(start) = current {
        words.push(Word {
            start,
            end: text.len(),
            lower: text[start..].to_lowercase(),
        });
    }
    words
}

/// Consume edition segments right to left. Each entry is the start of the
/// phrase made of all segments consumed so far, separators included.
fn segment_starts(text: &str) -> Vec<usize> {
    let words = words(text);
    let mut starts = Vec::new();
    let mut boundary = text.len();
    let mut remaining = words.len();

    while remaining > 0 && words[remaining - 1].end == boundary {
        let Some(count) = match_segment(&words[..remaining]) else {
            break;
        };
        let segment = &words[remaining - count..remaining];
        let spaced = segment
            .windows(2)
            .all(|pair| text[pair[0].end..pair[1].start].trim().is_empty());
        if !spaced {
            break;
        }

        boundary = extend_over_separator(text, segment[0].start);
        starts.push(boundary);
        remaining -= count;
    }

    starts
}

/// Number of trailing words forming one segment, if they do.
fn match_segment(words: &[Word]) -> Option<usize> {
    let (last, before) = words.split_last()?;
    if EDITION_NOUNS.contains(&last.lower.as_str()) {
        if let Some(count) = match_term(before) {
            return Some(count + 1);
        }
        return (!before.is_empty()).then_some(2);
    }
    match_term(words)
}

/// Length of the longest vocabulary term the words end with.
fn match_term(words: &[Word]) -> Option<usize> {
    EDITION_TERMS
        .iter()
        .filter(|term| {
            term.len() <= words.len()
                && words[words.len() - term.len()..]
                    .iter()
                    .zip(term.iter())
                    .all(|(w, t)| w.lower == *t)
        })
        .map(|term| term.len())
        .max()
}

/// Move `pos` left over whitespace and at most one separator.
fn extend_over_separator(text: &str, pos: usize) -> usize {
    let before = text[..pos].trim_end();
    match before.strip_suffix(SEPARATORS) {
        Some(rest) => rest.trim_end().len(),
        None => before.len(),
    }
}

#[cfg(test)]
#[path = "tests/edition_tests.rs"]
mod tests;
