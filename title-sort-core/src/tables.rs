//! Constant lookup tables shared by the numeral scanner and the roman
//! numeral converter.

/// Value of a single roman numeral glyph.
///
/// Covers ASCII `IVXLCDM`, the Unicode Roman Numerals block (upper and lower
/// case forms, including the precomposed `Ⅱ`..`Ⅻ`), and the archaic
/// large-number glyphs `ↀ`..`ↈ`.
pub fn roman_value(c: char) -> Option<u64> {
    let value = match c {
        'I' => 1,
        'V' => 5,
        'X' => 10,
        'L' => 50,
        'C' => 100,
        'D' => 500,
        'M' => 1000,

        'Ⅰ' | 'ⅰ' => 1,
        'Ⅱ' | 'ⅱ' => 2,
        'Ⅲ' | 'ⅲ' => 3,
        'Ⅳ' | 'ⅳ' => 4,
        'Ⅴ' | 'ⅴ' => 5,
        'Ⅵ' | 'ⅵ' => 6,
        'Ⅶ' | 'ⅶ' => 7,
        'Ⅷ' | 'ⅷ' => 8,
        'Ⅸ' | 'ⅸ' => 9,
        'Ⅹ' | 'ⅹ' => 10,
        'Ⅺ' | 'ⅺ' => 11,
        'Ⅻ' | 'ⅻ' => 12,
        'Ⅼ' | 'ⅼ' => 50,
        'Ⅽ' | 'ⅽ' => 100,
        'Ⅾ' | 'ⅾ' => 500,
        'Ⅿ' | 'ⅿ' => 1000,

        'ↀ' => 1000,
        'ↁ' => 5000,
        'ↂ' => 10_000,
        'Ↄ' | 'ↄ' => 100,
        'ↅ' => 6,
        'ↆ' => 50,
        'ↇ' => 50_000,
        'ↈ' => 100_000,
        _ => return None,
    };
    Some(value)
}

/// Returns true if `c` belongs to the roman numeral alphabet.
pub fn is_roman_glyph(c: char) -> bool {
    roman_value(c).is_some()
}

/// Spelled-out numbers that are converted. Only small values show up in
/// titles often enough to be worth the false positives.
const NUMBER_WORDS: &[(&str, u64)] = &[("one", 1), ("two", 2), ("three", 3)];

/// Look up a number word (case-insensitive).
pub fn number_word_value(word: &str) -> Option<u64> {
    NUMBER_WORDS
        .iter()
        .find(|(w, _)| w.eq_ignore_ascii_case(word))
        .map(|&(_, v)| v)
}

/// Valid roman numerals that appear in titles as abbreviations or plain
/// letters far more often than as numbers ("XL", "MIX", "DC", ...).
pub const EXCLUDED_NUMERALS: &[&str] = &[
    "XL", "XD", "DX", "XXX", "L", "C", "D", "M", "MII", "MIX", "MX", "MC", "DC",
];

/// Returns true if `token` is a roman numeral that must stay literal.
pub fn is_excluded_numeral(token: &str) -> bool {
    EXCLUDED_NUMERALS.contains(&token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_glyphs() {
        let values: Vec<u64> = "IVXLCDM".chars().filter_map(roman_value).collect();
        assert_eq!(values, vec![1, 5, 10, 50, 100, 500, 1000]);
        assert_eq!(roman_value('i'), None);
        assert_eq!(roman_value('A'), None);
    }

    #[test]
    fn unicode_block_glyphs() {
        assert_eq!(roman_value('Ⅻ'), Some(12));
        assert_eq!(roman_value('ⅻ'), Some(12));
        assert_eq!(roman_value('Ⅿ'), Some(1000));
        assert_eq!(roman_value('ↂ'), Some(10_000));
        assert_eq!(roman_value('ↈ'), Some(100_000));
        // Every code point in U+2160..=U+2188 is a numeral glyph
        assert!(('\u{2160}'..='\u{2188}').all(is_roman_glyph));
    }

    #[test]
    fn number_words_ignore_case() {
        assert_eq!(number_word_value("one"), Some(1));
        assert_eq!(number_word_value("TWO"), Some(2));
        assert_eq!(number_word_value("Three"), Some(3));
        assert_eq!(number_word_value("four"), None);
        assert_eq!(number_word_value("ones"), None);
    }

    #[test]
    fn excluded_numerals_are_exact() {
        assert!(is_excluded_numeral("XXX"));
        assert!(is_excluded_numeral("MIX"));
        assert!(!is_excluded_numeral("XX"));
        assert!(!is_excluded_numeral("mix"));
    }
}
