//! Leading/trailing article removal ("The Legend of Zelda",
//! "Legend of Zelda, The").

/// Remove at most one leading article and at most one trailing `", article"`.
///
/// Matching is case-insensitive. A leading article only counts when it is
/// followed by a space, so "Anna" and "Theatre" are left alone.
///
/// # Examples
///
/// ```
/// use title_sort_core::articles::strip_articles;
///
/// let articles = ["the", "a", "an"];
/// assert_eq!(strip_articles("The Legend of Zelda", &articles), "Legend of Zelda");
/// assert_eq!(strip_articles("Legend of Zelda, The", &articles), "Legend of Zelda");
/// assert_eq!(strip_articles("Anna", &articles), "Anna");
/// ```
pub fn strip_articles<'a, S: AsRef<str>>(title: &'a str, articles: &[S]) -> &'a str {
    let mut rest = title.trim();

    for article in articles {
        if let Some(stripped) = strip_leading(rest, article.as_ref()) {
            rest = stripped;
            break;
        }
    }

    for article in articles {
        if let Some(stripped) = strip_trailing(rest, article.as_ref()) {
            rest = stripped;
            break;
        }
    }

    rest.trim()
}

/// "The Title" → "Title"
fn strip_leading<'a>(title: &'a str, article: &str) -> Option<&'a str> {
    let head = title.get(..article.len())?;
    if !same_word(head, article) {
        return None;
    }
    title[article.len()..].strip_prefix(' ')
}

/// "Title, The" → "Title"
fn strip_trailing<'a>(title: &'a str, article: &str) -> Option<&'a str> {
    let split = title.len().checked_sub(article.len())?;
    let tail = title.get(split..)?;
    if !same_word(tail, article) {
        return None;
    }
    let head = title[..split].trim_end().strip_suffix(',')?;
    Some(head)
}

fn same_word(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b) || a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT: [&str; 3] = ["the", "a", "an"];

    #[test]
    fn leading_article() {
        assert_eq!(strip_articles("The Witcher", &DEFAULT), "Witcher");
        assert_eq!(strip_articles("A Hat in Time", &DEFAULT), "Hat in Time");
        assert_eq!(strip_articles("An Untitled Story", &DEFAULT), "Untitled Story");
    }

    #[test]
    fn leading_article_ignores_case() {
        assert_eq!(strip_articles("THE WITCHER", &DEFAULT), "WITCHER");
        assert_eq!(strip_articles("the witcher", &DEFAULT), "witcher");
    }

    #[test]
    fn trailing_article() {
        assert_eq!(strip_articles("Witcher, The", &DEFAULT), "Witcher");
        assert_eq!(strip_articles("Witcher , the", &DEFAULT), "Witcher");
    }

    #[test]
    fn only_one_of_each() {
        assert_eq!(strip_articles("The The Game", &DEFAULT), "The Game");
        assert_eq!(strip_articles("The Game, The", &DEFAULT), "Game");
    }

    #[test]
    fn article_must_be_a_whole_word() {
        assert_eq!(strip_articles("Anna", &DEFAULT), "Anna");
        assert_eq!(strip_articles("Theatrhythm", &DEFAULT), "Theatrhythm");
        assert_eq!(strip_articles("Amnesia", &DEFAULT), "Amnesia");
        assert_eq!(strip_articles("Journey, Another", &DEFAULT), "Journey, Another");
        assert_eq!(strip_articles("Cathe", &DEFAULT), "Cathe");
    }

    #[test]
    fn bare_article_is_kept() {
        assert_eq!(strip_articles("The", &DEFAULT), "The");
        assert_eq!(strip_articles("A", &DEFAULT), "A");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(strip_articles("  The  Witcher  ", &DEFAULT), "Witcher");
    }

    #[test]
    fn custom_articles() {
        let articles = ["der", "die", "das"];
        assert_eq!(strip_articles("Die Siedler", &articles), "Siedler");
        assert_eq!(strip_articles("The Witcher", &articles), "The Witcher");
    }

    #[test]
    fn non_ascii_titles_do_not_panic() {
        assert_eq!(strip_articles("Ōkami", &DEFAULT), "Ōkami");
        assert_eq!(strip_articles("ÆÆ", &DEFAULT), "ÆÆ");
    }
}
