//! Filtering and ordering of typeahead candidates.
//!
//! Candidates are kept when their lowercase form contains the lowercase
//! query. Survivors are deduplicated on their display key (first occurrence
//! wins) and ordered by:
//!
//! 1. exact match,
//! 2. prefix match,
//! 3. alphabetical order of the lowercased value, accents folded.
//!
//! The ranker holds no state between calls.

use std::cmp::Ordering;
use std::collections::HashSet;

use typeahead_model::{DisplayKey, Suggestion};

use crate::extract::KeyExtractor;
use crate::normalize::{collation_key, fold_case};
use crate::tier::Tier;

/// Configurable typeahead ranker.
#[derive(Debug, Clone, Default)]
pub struct Ranker<E = DisplayKey> {
    extractor: E,
    limit: Option<usize>,
}

impl Ranker<DisplayKey> {
    /// Ranker with the identity display key and no cap.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: KeyExtractor> Ranker<E> {
    /// Replace the display-key extractor.
    pub fn with_extractor<F: KeyExtractor>(self, extractor: F) -> Ranker<F> {
        Ranker {
            extractor,
            limit: self.limit,
        }
    }

    /// Cap the number of returned suggestions. Applied after ordering.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Rank raw candidate strings against `query`.
    ///
    /// Each suggestion submits the original candidate and is labelled with
    /// its display key.
    pub fn rank<I, S>(&self, candidates: I, query: &str) -> Vec<Suggestion>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let suggestions = candidates.into_iter().map(|candidate| {
            let value = candidate.as_ref();
            Suggestion::new(value, self.extractor.extract(value))
        });
        self.rank_entries(suggestions, query)
    }

    /// Rank suggestions that already carry their own labels.
    ///
    /// Matching and ordering use `value`; deduplication uses `label`.
    pub fn rank_suggestions<I>(&self, suggestions: I, query: &str) -> Vec<Suggestion>
    where
        I: IntoIterator<Item = Suggestion>,
    {
        self.rank_entries(suggestions, query)
    }

    fn rank_entries<I>(&self, suggestions: I, query: &str) -> Vec<Suggestion>
    where
        I: IntoIterator<Item = Suggestion>,
    {
        let needle = fold_case(query);
        let mut seen: HashSet<String> = HashSet::new();
        let mut ranked: Vec<Ranked> = Vec::new();
        let mut considered = 0usize;

        for suggestion in suggestions {
            considered += 1;
            let lower = fold_case(&suggestion.value);
            if !lower.contains(needle.as_str()) {
                continue;
            }
            if !seen.insert(suggestion.label.clone()) {
                continue;
            }
            let tier = Tier::classify(&lower, &needle);
            let collation = collation_key(&lower).into_owned();
            ranked.push(Ranked {
                tier,
                collation,
                lower,
                suggestion,
            });
        }

        // Stable: full ties keep input order.
        ranked.sort_by(Ranked::compare);

        let matched = ranked.len();
        let mut out: Vec<Suggestion> = ranked.into_iter().map(|r| r.suggestion).collect();
        if let Some(limit) = self.limit {
            out.truncate(limit);
        }
        tracing::trace!(
            query,
            considered,
            matched,
            returned = out.len(),
            "ranked typeahead candidates"
        );
        out
    }
}

struct Ranked {
    tier: Tier,
    collation: String,
    lower: String,
    suggestion: Suggestion,
}

impl Ranked {
    fn compare(a: &Self, b: &Self) -> Ordering {
        a.tier
            .cmp(&b.tier)
            .then_with(|| a.collation.cmp(&b.collation))
            .then_with(|| a.lower.cmp(&b.lower))
            .then_with(|| a.suggestion.value.cmp(&b.suggestion.value))
    }
}

/// Rank `candidates` against `query` with the identity display key.
pub fn rank<I, S>(candidates: I, query: &str) -> Vec<Suggestion>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Ranker::new().rank(candidates, query)
}
