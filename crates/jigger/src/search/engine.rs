//! Fuzzy relevance search over precomputed haystacks.

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::naming;

/// Default cap on search results. High enough that a site-wide search is
/// effectively uncapped.
pub const DEFAULT_SEARCH_LIMIT: usize = 1000;

/// Match `needle` against per-item haystack texts and return the matching
/// items, best first.
///
/// `items[i]` pairs with `haystack[i]`, which callers derive once via
/// [`crate::search`]'s text builders (already folded). The needle is folded
/// here, so "Café" finds "cafe". An empty or whitespace-only needle matches
/// nothing. Results borrow from `items`, ordered by descending score with
/// input order breaking ties, truncated to `limit`.
pub fn fuzzy_search<'a, T>(
    items: &'a [T],
    haystack: &[String],
    needle: &str,
    limit: usize,
) -> Vec<&'a T> {
    debug_assert_eq!(items.len(), haystack.len());

    let needle = naming::fold(needle.trim());
    if needle.is_empty() {
        return Vec::new();
    }

    let matcher = SkimMatcherV2::default();
    let mut scored: Vec<(i64, usize)> = haystack
        .iter()
        .enumerate()
        .filter_map(|(index, text)| {
            matcher
                .fuzzy_match(text, &needle)
                .map(|score| (score, index))
        })
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));

    scored
        .into_iter()
        .take(limit)
        .map(|(_, index)| &items[index])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn haystack_for(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| naming::fold(name)).collect()
    }

    #[test]
    fn exact_name_outscores_scattered_matches() {
        let names = vec![
            "Daiquiri".to_string(),
            "Hemingway Daiquiri".to_string(),
            "Dark and Stormy".to_string(),
        ];
        let haystack = haystack_for(&["Daiquiri", "Hemingway Daiquiri", "Dark and Stormy"]);

        let hits = fuzzy_search(&names, &haystack, "daiquiri", 10);
        assert!(!hits.is_empty());
        assert_eq!(hits[0], "Daiquiri");
        assert!(hits.contains(&&"Hemingway Daiquiri".to_string()));
    }

    #[test]
    fn accented_needle_matches_folded_haystack() {
        let names = vec!["Cafe Paris".to_string()];
        let haystack = haystack_for(&["Cafe Paris"]);

        let hits = fuzzy_search(&names, &haystack, "Café", 10);
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn blank_needle_matches_nothing() {
        let names = vec!["Daiquiri".to_string()];
        let haystack = haystack_for(&["Daiquiri"]);

        assert!(fuzzy_search(&names, &haystack, "", 10).is_empty());
        assert!(fuzzy_search(&names, &haystack, "   ", 10).is_empty());
    }

    #[test]
    fn limit_truncates_results() {
        let names: Vec<String> = (0..20).map(|i| format!("Gin Fizz {i}")).collect();
        let haystack: Vec<String> = names.iter().map(|name| naming::fold(name)).collect();

        let hits = fuzzy_search(&names, &haystack, "gin", 5);
        assert_eq!(hits.len(), 5);
    }

    #[test]
    fn unmatched_needle_yields_empty() {
        let names = vec!["Daiquiri".to_string()];
        let haystack = haystack_for(&["Daiquiri"]);

        assert!(fuzzy_search(&names, &haystack, "zzzzqqqq", 10).is_empty());
    }

    #[test]
    fn results_borrow_from_items() {
        let names = vec!["Negroni".to_string(), "Boulevardier".to_string()];
        let haystack = haystack_for(&["Negroni", "Boulevardier"]);

        let hits = fuzzy_search(&names, &haystack, "negroni", 10);
        assert!(hits.iter().all(|hit| names.iter().any(|n| std::ptr::eq(*hit, n))));
    }
}
