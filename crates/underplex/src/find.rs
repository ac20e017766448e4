//! Lookups over collections: substring search on `Display` text and
//! min/max by comparator.
//!
//! The search helpers are meant for locating elements known mostly by name.
//! Matching is case-insensitive and ambiguous searches simply return the last
//! match, so callers should pick search terms that identify one element.

use std::cmp::Ordering;
use std::fmt::Display;

fn matches_all(text: &str, search: &[&str]) -> bool {
    search.iter().all(|s| text.contains(&s.to_uppercase()))
}

/// Last element whose `Display` text contains every string in `search`.
///
/// `None` when nothing matches or `items` is empty.
pub fn find<I>(items: I, search: &[&str]) -> Option<I::Item>
where
    I: IntoIterator,
    I::Item: Display,
{
    items
        .into_iter()
        .filter(|t| matches_all(&t.to_string().to_uppercase(), search))
        .last()
}

/// Like `find`, but also rejects elements whose text contains `without`.
pub fn find_excluding<I>(without: &str, items: I, search: &[&str]) -> Option<I::Item>
where
    I: IntoIterator,
    I::Item: Display,
{
    let without = without.to_uppercase();
    items
        .into_iter()
        .filter(|t| {
            let text = t.to_string().to_uppercase();
            !text.contains(&without) && matches_all(&text, search)
        })
        .last()
}

/// Lowest-ranked element under `cmp`; among ties the earliest one wins.
pub fn first_by<I, F>(items: I, mut cmp: F) -> Option<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    items.into_iter().min_by(|a, b| cmp(a, b))
}

/// Highest-ranked element under `cmp`; among ties the earliest one wins.
pub fn last_by<I, F>(items: I, mut cmp: F) -> Option<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    // min_by keeps the first of equal elements
    items.into_iter().min_by(|a, b| cmp(b, a))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn routes() -> Vec<String> {
        let departs = ["new york", "boston", "los angeles", "phoenix", "MINNEAPOLIS", "detROIT"];
        let arrives = ["atlanta", "san francisco", "kanSAS city", "housTON", "baltimore", "DENver"];
        departs
            .iter()
            .flat_map(|d| arrives.iter().map(move |a| format!("{d} to {a}")))
            .collect()
    }

    #[test]
    fn case_insensitive_multi_term_search() {
        let r = routes();
        assert_eq!(r.len(), 36);
        assert_eq!(
            find(&r, &["atlanta", "minneapolis"]).map(String::as_str),
            Some("MINNEAPOLIS to atlanta")
        );
        assert_eq!(
            find(&r, &["new", "cISco"]).map(String::as_str),
            Some("new york to san francisco")
        );
        assert_eq!(
            find(&r, &["denver", "YORK"]).map(String::as_str),
            Some("new york to DENver")
        );
        assert_eq!(
            find(&r, &["b", "o", "s", "t", "o", "n", "c", "i", "t", "y"]).map(String::as_str),
            Some("boston to kanSAS city")
        );
        assert!(find(&r, &["atlanta", "san fran"]).is_none());
        assert!(find(&r, &["denver", "YORK", "balti"]).is_none());
        let empty: Vec<String> = Vec::new();
        assert!(find(&empty, &["new york", "baltimore"]).is_none());
    }

    #[test]
    fn excluding_filters_out_matches() {
        let r = routes();
        assert_eq!(
            find_excluding("york", &r, &["denver"]).map(String::as_str),
            Some("detROIT to DENver")
        );
        assert!(find_excluding("to", &r, &["denver"]).is_none());
    }

    #[test]
    fn ambiguous_search_returns_last_match() {
        let items = ["red fish", "blue fish", "one fish"];
        assert_eq!(find(items, &["FISH"]), Some("one fish"));
    }

    #[test]
    fn min_max_by_comparator() {
        let words = ["pear", "fig", "banana", "kiwi"];
        assert_eq!(first_by(words, |a, b| a.len().cmp(&b.len())), Some("fig"));
        assert_eq!(last_by(words, |a, b| a.len().cmp(&b.len())), Some("banana"));
        let none: [&str; 0] = [];
        assert_eq!(last_by(none, |a, b| a.cmp(b)), None);
    }

    #[test]
    fn ties_keep_the_earliest_element() {
        let words = ["pear", "fig", "kiwi", "plum", "yam"];
        assert_eq!(last_by(words, |a, b| a.len().cmp(&b.len())), Some("pear"));
        assert_eq!(first_by(words, |a, b| a.len().cmp(&b.len())), Some("fig"));
    }
}
