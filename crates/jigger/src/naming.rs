//! Display-name handling: article-stripped sort keys, index letters, and
//! accent-insensitive ordering.
//!
//! Every list the catalog renders alphabetically goes through this module,
//! so "The Last Word" files under L and "Évangéline" files under E.

use std::cmp::Ordering;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Leading English articles stripped for sorting and grouping. The optional
/// group backtracks, so a name that is nothing but an article keeps it.
static ARTICLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:the |an |a )?(.+)$").unwrap()
});

/// Index bucket for names that start with a digit, and for empty names.
const DIGIT_GROUP: char = '#';

/// Strip combining marks after decomposition, mapping accented characters
/// to their closest ASCII equivalents ("café" to "cafe").
pub fn transliterate(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Fold a string for comparison: transliterated, then lowercased.
pub fn fold(text: &str) -> String {
    transliterate(text).to_lowercase()
}

/// The substring a name sorts by: the name with any single leading article
/// removed. A name that is only an article, or empty, is returned whole.
pub fn sort_key(name: &str) -> &str {
    ARTICLE
        .captures(name)
        .and_then(|captures| captures.get(1))
        .map(|matched| matched.as_str())
        .unwrap_or(name)
}

/// The uppercased first character of the sort key, or `#` for an empty
/// name. Digits come back as themselves; [`group_letter`] folds them into
/// the `#` bucket.
pub fn first_letter(name: &str) -> char {
    match sort_key(name).chars().next() {
        Some(c) => c.to_uppercase().next().unwrap_or(DIGIT_GROUP),
        None => DIGIT_GROUP,
    }
}

/// The index header a name files under: `#` for digits and empty names,
/// otherwise the accent-folded uppercase first letter.
pub fn group_letter(name: &str) -> char {
    let key = transliterate(sort_key(name));
    match key.chars().next() {
        Some(c) if c.is_ascii_digit() => DIGIT_GROUP,
        Some(c) => c.to_uppercase().next().unwrap_or(DIGIT_GROUP),
        None => DIGIT_GROUP,
    }
}

/// Compare two display names as an index would: article-stripped,
/// accent-folded, case-insensitive. Names equal under folding fall back to
/// a raw comparison so the order is total and deterministic.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    fold(sort_key(a))
        .cmp(&fold(sort_key(b)))
        .then_with(|| a.cmp(b))
}

/// Order two index headers: `#` sorts before every letter.
pub fn compare_group_letters(a: char, b: char) -> Ordering {
    match (a == DIGIT_GROUP, b == DIGIT_GROUP) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.cmp(&b),
    }
}

/// Group items under their index headers, `#` first, items in index order
/// within each group. Items are borrowed, never cloned.
pub fn letter_groups<T, F>(items: &[T], name_of: F) -> IndexMap<char, Vec<&T>>
where
    F: Fn(&T) -> &str,
{
    let mut ordered: Vec<&T> = items.iter().collect();
    ordered.sort_by(|a, b| compare_names(name_of(a), name_of(b)));

    let mut groups: IndexMap<char, Vec<&T>> = IndexMap::new();
    for item in ordered {
        groups
            .entry(group_letter(name_of(item)))
            .or_default()
            .push(item);
    }
    groups.sort_by(|key_a, _, key_b, _| compare_group_letters(*key_a, *key_b));
    groups
}
