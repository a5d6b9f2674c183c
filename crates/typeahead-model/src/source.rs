//! Where a typeahead field gets its candidates from.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::suggestion::Suggestion;

/// Page size used when a field pulls a whole category and filters locally.
///
/// Categories larger than this are silently cut at the cap, so it marks the
/// scale at which filtering has to move to the data service.
pub const DEFAULT_PAGE_LIMIT: usize = 5000;

fn default_page_limit() -> usize {
    DEFAULT_PAGE_LIMIT
}

/// Candidate source attached to a filter field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CandidateSource {
    /// Link lookup on a category, optionally restricted by equality filters.
    Link {
        doctype: String,
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        filters: BTreeMap<String, String>,
    },
    /// Whole-category pull capped at `page_limit` rows.
    List {
        doctype: String,
        #[serde(default = "default_page_limit")]
        page_limit: usize,
    },
    /// Distinct non-empty values of one attribute across a category.
    Distinct { doctype: String, field: String },
    /// Fixed option list; nothing is fetched.
    Static { options: Vec<Suggestion> },
}

impl CandidateSource {
    pub fn link(doctype: impl Into<String>) -> Self {
        Self::Link {
            doctype: doctype.into(),
            filters: BTreeMap::new(),
        }
    }

    pub fn link_filtered<I, K, V>(doctype: impl Into<String>, filters: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::Link {
            doctype: doctype.into(),
            filters: filters
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn list(doctype: impl Into<String>) -> Self {
        Self::List {
            doctype: doctype.into(),
            page_limit: DEFAULT_PAGE_LIMIT,
        }
    }

    pub fn distinct(doctype: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Distinct {
            doctype: doctype.into(),
            field: field.into(),
        }
    }

    pub fn fixed<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Static {
            options: values.into_iter().map(Suggestion::plain).collect(),
        }
    }

    /// Category this source reads from, if it reads from one.
    pub fn doctype(&self) -> Option<&str> {
        match self {
            Self::Link { doctype, .. }
            | Self::List { doctype, .. }
            | Self::Distinct { doctype, .. } => Some(doctype),
            Self::Static { .. } => None,
        }
    }

    /// Short human-readable description, e.g. `link:Warehouse`.
    pub fn describe(&self) -> String {
        match self {
            Self::Link { doctype, filters } if filters.is_empty() => format!("link:{doctype}"),
            Self::Link { doctype, filters } => {
                let filters = filters
                    .iter()
                    .map(|(k, v)| format!("{k}={v}"))
                    .collect::<Vec<_>>()
                    .join(",");
                format!("link:{doctype}[{filters}]")
            }
            Self::List {
                doctype,
                page_limit,
            } => format!("list:{doctype}(<={page_limit})"),
            Self::Distinct { doctype, field } => format!("distinct:{doctype}.{field}"),
            Self::Static { options } => format!("static({})", options.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_defaults_to_page_limit() {
        let source: CandidateSource =
            serde_json::from_str(r#"{"kind":"list","doctype":"Item Group"}"#).unwrap();
        assert_eq!(source, CandidateSource::list("Item Group"));
        assert!(source.describe().contains("5000"));
    }

    #[test]
    fn describe_link_with_filters() {
        let source = CandidateSource::link_filtered("User", [("user_type", "System User")]);
        assert_eq!(source.describe(), "link:User[user_type=System User]");
        assert_eq!(source.doctype(), Some("User"));
    }

    #[test]
    fn static_source_has_no_doctype() {
        let source = CandidateSource::fixed(["Draft", "Completed"]);
        assert_eq!(source.doctype(), None);
        assert_eq!(source.describe(), "static(2)");
    }
}
