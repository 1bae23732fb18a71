//! Title comparison and ordering built on [`TitleNormalizer`].
//!
//! Records coming from different sources ("Final Fantasy VII" from one site,
//! "final fantasy 7" from another) compare equal once both are normalized.

use crate::normalizer::TitleNormalizer;

impl TitleNormalizer {
    /// Key for ordering titles: the sortable title, lowercased.
    pub fn sort_key(&self, title: &str) -> String {
        self.convert(title).to_lowercase()
    }

    /// True if both titles normalize to the same text, ignoring case.
    ///
    /// # Examples
    ///
    /// ```
    /// use title_sort_core::TitleNormalizer;
    ///
    /// let normalizer = TitleNormalizer::default();
    /// assert!(normalizer.titles_match("Final Fantasy VII", "final fantasy 7"));
    /// assert!(!normalizer.titles_match("Final Fantasy VII", "Final Fantasy VIII"));
    /// ```
    pub fn titles_match(&self, a: &str, b: &str) -> bool {
        self.sort_key(a) == self.sort_key(b)
    }
}

/// Sort `items` by the sortable form of their titles.
///
/// Ties (titles that normalize identically) fall back to the original title,
/// so the order is deterministic. Each key is computed once.
pub fn sort_by_title<T, F>(normalizer: &TitleNormalizer, items: &mut [T], title_of: F)
where
    F: Fn(&T) -> &str,
{
    items.sort_by_cached_key(|item| {
        let title = title_of(item);
        (normalizer.sort_key(title), title.to_string())
    });
}
