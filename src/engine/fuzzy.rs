//! Typo-tolerant text search over item fields.
//!
//! Each searchable field (title, description, every topic, location) is scored
//! against the query with an approximate-substring match: the fewest edits needed
//! to turn the query into some substring of the field. The score normalizes the
//! edit count by the query length and adds a small penalty for matches that start
//! far from the beginning of the field:
//!
//! ```text
//! score = errors / query_len + match_start / LOCATION_DISTANCE
//! ```
//!
//! `0.0` is an exact match at the start of a field. An item's score is its best
//! field score, and items scoring at or below the threshold match. Ties are
//! broken by the skim subsequence score of the whole item text, then by list
//! order.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::cmp::Ordering;

use crate::domain::FilterableItem;

/// Default similarity threshold; tolerates roughly one typo in three characters.
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// How many characters into a field a match may start before the proximity
/// penalty alone reaches `1.0`.
const LOCATION_DISTANCE: f64 = 100.0;

/// Queries longer than this are scored on edit errors only.
const MAX_PROXIMITY_PATTERN_LEN: usize = 32;

/// One search result: the item's position in the indexed list and its score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit {
    pub index: usize,
    pub score: f64,
}

#[derive(Debug, Clone)]
struct IndexedItem {
    fields: Vec<Vec<char>>,
    haystack: String,
}

/// Pre-lowercased searchable text for a fixed item list.
///
/// Built once per item list and reused for every query against it.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    entries: Vec<IndexedItem>,
}

impl SearchIndex {
    /// Indexes the title, description, topics and location of every item.
    #[must_use]
    pub fn build(items: &[FilterableItem]) -> Self {
        let _span = tracing::debug_span!("build_search_index", items = items.len()).entered();

        let entries = items
            .iter()
            .map(|item| {
                let texts: Vec<String> = std::iter::once(item.title.as_str())
                    .chain(item.description.as_deref())
                    .chain(item.topics.iter().map(String::as_str))
                    .chain(item.location.as_deref())
                    .filter(|text| !text.is_empty())
                    .map(str::to_lowercase)
                    .collect();
                IndexedItem {
                    haystack: texts.join(" "),
                    fields: texts.iter().map(|t| t.chars().collect()).collect(),
                }
            })
            .collect();

        tracing::debug!("search index built");
        Self { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns every item scoring within `threshold`, best first.
    ///
    /// An empty (or whitespace-only) query matches nothing; callers skip the
    /// search step entirely when the search text is empty.
    #[must_use]
    pub fn search(&self, query: &str, threshold: f64) -> Vec<SearchHit> {
        let query = query.trim().to_lowercase();
        let pattern: Vec<char> = query.chars().collect();
        if pattern.is_empty() {
            return Vec::new();
        }

        let skim = SkimMatcherV2::default();
        let mut hits: Vec<(SearchHit, i64)> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                let score = entry
                    .fields
                    .iter()
                    .filter_map(|field| field_score(&pattern, field))
                    .fold(None, |best: Option<f64>, s| Some(best.map_or(s, |b| b.min(s))))?;
                if score > threshold {
                    return None;
                }
                let tie_break = skim.fuzzy_match(&entry.haystack, &query).unwrap_or(0);
                Some((SearchHit { index, score }, tie_break))
            })
            .collect();

        hits.sort_by(|(a, a_skim), (b, b_skim)| {
            a.score
                .partial_cmp(&b.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| b_skim.cmp(a_skim))
                .then_with(|| a.index.cmp(&b.index))
        });

        tracing::trace!(query = %query, hits = hits.len(), "fuzzy search complete");
        hits.into_iter().map(|(hit, _)| hit).collect()
    }
}

/// Scores `pattern` against the best-matching substring of `text`.
///
/// Both inputs must already be lowercased. Returns `None` when no substring is
/// closer than replacing every pattern character.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn field_score(pattern: &[char], text: &[char]) -> Option<f64> {
    let m = pattern.len();
    if m == 0 {
        return None;
    }

    // Row i holds the fewest edits turning pattern[..i] into a substring of text
    // ending at column j, together with that substring's start column.
    let mut prev: Vec<(usize, usize)> = (0..=text.len()).map(|j| (0, j)).collect();
    let mut cur: Vec<(usize, usize)> = vec![(0, 0); text.len() + 1];

    for (i, &pc) in pattern.iter().enumerate() {
        cur[0] = (i + 1, 0);
        for (j, &tc) in text.iter().enumerate() {
            let (diag_cost, diag_start) = prev[j];
            let substitute = (diag_cost + usize::from(pc != tc), diag_start);
            let skip_pattern = (prev[j + 1].0 + 1, prev[j + 1].1);
            let skip_text = (cur[j].0 + 1, cur[j].1);

            let mut best = substitute;
            if skip_pattern.0 < best.0 {
                best = skip_pattern;
            }
            if skip_text.0 < best.0 {
                best = skip_text;
            }
            cur[j + 1] = best;
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    prev.iter()
        .filter(|(errors, _)| *errors < m)
        .map(|&(errors, start)| {
            let accuracy = errors as f64 / m as f64;
            if m > MAX_PROXIMITY_PATTERN_LEN {
                accuracy
            } else {
                accuracy + start as f64 / LOCATION_DISTANCE
            }
        })
        .fold(None, |best: Option<f64>, s| Some(best.map_or(s, |b| b.min(s))))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn items() -> Vec<FilterableItem> {
        vec![
            FilterableItem::new("1", "Intro to Go", "2024-01-01")
                .with_topics(["go"])
                .with_location("Osaka"),
            FilterableItem::new("2", "Rust Basics", "2024-02-01")
                .with_topics(["rust"])
                .with_location("Tokyo"),
        ]
    }

    #[test]
    fn test_exact_prefix_scores_zero() {
        assert_eq!(field_score(&chars("rust"), &chars("rust basics")), Some(0.0));
    }

    #[test]
    fn test_missing_character_costs_one_error() {
        let score = field_score(&chars("rst basics"), &chars("rust basics")).unwrap();
        assert!((score - 0.1).abs() < 1e-9, "score was {score}");
    }

    #[test]
    fn test_later_match_pays_proximity_penalty() {
        let score = field_score(&chars("basics"), &chars("rust basics")).unwrap();
        assert!((score - 0.05).abs() < 1e-9, "score was {score}");
    }

    #[test]
    fn test_unrelated_text_scores_above_threshold() {
        let score = field_score(&chars("kubernetes"), &chars("intro to go"));
        assert!(score.map_or(true, |s| s > DEFAULT_THRESHOLD));
    }

    #[test]
    fn test_search_tolerates_typo() {
        let index = SearchIndex::build(&items());
        let hits = index.search("Rst Basics", DEFAULT_THRESHOLD);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].index, 1);
    }

    #[test]
    fn test_search_matches_topics_and_location() {
        let index = SearchIndex::build(&items());
        let by_location: Vec<usize> = index.search("osaka", DEFAULT_THRESHOLD).iter().map(|h| h.index).collect();
        assert_eq!(by_location, vec![0]);
        let by_topic: Vec<usize> = index.search("RUST", DEFAULT_THRESHOLD).iter().map(|h| h.index).collect();
        assert_eq!(by_topic, vec![1]);
    }

    #[test]
    fn test_search_orders_by_score() {
        let list = vec![
            FilterableItem::new("a", "Weekly meetup about tokio", "2024-01-01"),
            FilterableItem::new("b", "Tokio deep dive", "2024-01-01"),
        ];
        let index = SearchIndex::build(&list);
        let order: Vec<usize> = index.search("tokio", DEFAULT_THRESHOLD).iter().map(|h| h.index).collect();
        assert_eq!(order, vec![1, 0]);
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        let index = SearchIndex::build(&items());
        assert!(index.search("   ", DEFAULT_THRESHOLD).is_empty());
        assert_eq!(index.len(), 2);
    }
}
