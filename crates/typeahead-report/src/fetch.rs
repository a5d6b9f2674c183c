//! Candidate fetching boundary.
//!
//! The data service that owns the candidate lists sits behind
//! [`CandidateFetcher`]. Suggestion code treats any failure as "no
//! candidates" so a flaky lookup never breaks the filter control.

use std::collections::BTreeMap;

use typeahead_model::CandidateSource;

/// One lookup against the data service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub doctype: String,
    /// Attribute to return; `None` means the record name.
    pub field: Option<String>,
    /// Equality filters on record attributes.
    pub filters: BTreeMap<String, String>,
    pub limit: Option<usize>,
}

impl FetchRequest {
    pub fn new(doctype: impl Into<String>) -> Self {
        Self {
            doctype: doctype.into(),
            field: None,
            filters: BTreeMap::new(),
            limit: None,
        }
    }

    /// Request for a source, or `None` for sources that never fetch.
    pub fn for_source(source: &CandidateSource) -> Option<Self> {
        match source {
            CandidateSource::Link { doctype, filters } => Some(Self {
                filters: filters.clone(),
                ..Self::new(doctype.clone())
            }),
            CandidateSource::List {
                doctype,
                page_limit,
            } => Some(Self {
                limit: Some(*page_limit),
                ..Self::new(doctype.clone())
            }),
            CandidateSource::Distinct { doctype, field } => Some(Self {
                field: Some(field.clone()),
                ..Self::new(doctype.clone())
            }),
            CandidateSource::Static { .. } => None,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("unknown candidate source: {0}")]
    UnknownSource(String),
    #[error("candidate source unavailable: {0}")]
    Unavailable(String),
}

/// Supplies candidate strings for a request.
pub trait CandidateFetcher: Send + Sync {
    fn fetch(&self, request: &FetchRequest) -> Result<Vec<String>, FetchError>;
}

impl<F: CandidateFetcher + ?Sized> CandidateFetcher for &F {
    fn fetch(&self, request: &FetchRequest) -> Result<Vec<String>, FetchError> {
        (**self).fetch(request)
    }
}

impl<F: CandidateFetcher + ?Sized> CandidateFetcher for Box<F> {
    fn fetch(&self, request: &FetchRequest) -> Result<Vec<String>, FetchError> {
        (**self).fetch(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_request_carries_page_limit() {
        let request = FetchRequest::for_source(&CandidateSource::list("Item Group")).unwrap();
        assert_eq!(request.doctype, "Item Group");
        assert_eq!(request.limit, Some(5000));
        assert!(request.field.is_none());
    }

    #[test]
    fn distinct_request_selects_field() {
        let request =
            FetchRequest::for_source(&CandidateSource::distinct("Item", "custom_year")).unwrap();
        assert_eq!(request.field.as_deref(), Some("custom_year"));
    }

    #[test]
    fn static_source_needs_no_request() {
        assert!(FetchRequest::for_source(&CandidateSource::fixed(["Draft"])).is_none());
    }
}
