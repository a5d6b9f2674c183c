//! Typeahead suggestions for report filter fields.
//!
//! A lookup runs in two sequential steps: fetch the candidates named by the
//! field's source, then rank them against the typed text. A failed fetch
//! yields an empty suggestion list rather than an error.

use tracing::{debug, info_span, warn};
use typeahead_model::{CandidateSource, FilterField, Suggestion};
use typeahead_rank::Ranker;

use crate::error::{ReportError, Result};
use crate::fetch::{CandidateFetcher, FetchRequest};
use crate::registry::ReportRegistry;

/// Suggestion service over a report registry and a candidate fetcher.
#[derive(Debug, Clone)]
pub struct Suggester<F> {
    registry: ReportRegistry,
    fetcher: F,
    limit: Option<usize>,
}

impl<F: CandidateFetcher> Suggester<F> {
    pub fn new(registry: ReportRegistry, fetcher: F) -> Self {
        Self {
            registry,
            fetcher,
            limit: None,
        }
    }

    /// Cap the number of suggestions per lookup.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn registry(&self) -> &ReportRegistry {
        &self.registry
    }

    /// Suggestions for `field` of `report` given the typed `query`.
    pub fn suggest(&self, report: &str, field: &str, query: &str) -> Result<Vec<Suggestion>> {
        let definition = self
            .registry
            .get(report)
            .ok_or_else(|| ReportError::UnknownReport {
                name: report.to_string(),
            })?;
        let filter = definition
            .field(field)
            .ok_or_else(|| ReportError::UnknownField {
                report: report.to_string(),
                field: field.to_string(),
            })?;
        let source = filter
            .effective_source()
            .ok_or_else(|| ReportError::NoSource {
                report: report.to_string(),
                field: field.to_string(),
            })?;

        let span = info_span!("suggest", report, field);
        let _guard = span.enter();
        Ok(suggest_from_source(
            filter,
            &source,
            query,
            &self.fetcher,
            self.limit,
        ))
    }
}

/// Suggestions for a single field using its effective source.
///
/// Fields without a source get no suggestions.
pub fn suggest_for_field<F>(field: &FilterField, query: &str, fetcher: &F) -> Vec<Suggestion>
where
    F: CandidateFetcher + ?Sized,
{
    match field.effective_source() {
        Some(source) => suggest_from_source(field, &source, query, fetcher, None),
        None => Vec::new(),
    }
}

fn suggest_from_source<F>(
    field: &FilterField,
    source: &CandidateSource,
    query: &str,
    fetcher: &F,
    limit: Option<usize>,
) -> Vec<Suggestion>
where
    F: CandidateFetcher + ?Sized,
{
    let mut ranker = Ranker::new().with_extractor(field.display);
    if let Some(limit) = limit {
        ranker = ranker.with_limit(limit);
    }

    if let CandidateSource::Static { options } = source {
        return ranker.rank_suggestions(options.iter().cloned(), query);
    }

    let candidates = fetch_candidates(source, fetcher);
    let suggestions = ranker.rank(&candidates, query);
    debug!(
        source = %source.describe(),
        candidates = candidates.len(),
        suggestions = suggestions.len(),
        "ranked filter suggestions"
    );
    suggestions
}

/// Fetch the candidates of a non-static source, applying its page cap.
///
/// Errors are logged and produce an empty list.
pub fn fetch_candidates<F>(source: &CandidateSource, fetcher: &F) -> Vec<String>
where
    F: CandidateFetcher + ?Sized,
{
    let Some(request) = FetchRequest::for_source(source) else {
        return Vec::new();
    };
    let mut rows = match fetcher.fetch(&request) {
        Ok(rows) => rows,
        Err(error) => {
            warn!(
                doctype = %request.doctype,
                %error,
                "candidate fetch failed, offering no suggestions"
            );
            return Vec::new();
        }
    };
    if let Some(limit) = request.limit
        && rows.len() >= limit
    {
        debug!(
            doctype = %request.doctype,
            limit,
            fetched = rows.len(),
            "candidate list reached page limit"
        );
        rows.truncate(limit);
    }
    if matches!(source, CandidateSource::Distinct { .. }) {
        rows.retain(|value| !value.trim().is_empty());
    }
    rows
}
