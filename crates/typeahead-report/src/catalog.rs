//! In-memory candidate catalog loaded from TOML.
//!
//! # Format
//!
//! ```toml
//! [sources."Item Group"]
//! values = ["All Item Groups", "HOUSEWARE.KITCHEN"]
//!
//! [[sources.User.records]]
//! name = "ops@example.com"
//! user_type = "System User"
//! ```
//!
//! `values` is shorthand for records that only carry a `name`. Record
//! attributes may be strings, numbers or booleans; filters compare their
//! text form.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ReportError, Result};
use crate::fetch::{CandidateFetcher, FetchError, FetchRequest};

const NAME_FIELD: &str = "name";

/// Candidate records for one category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSource {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub records: Vec<BTreeMap<String, Value>>,
}

impl CatalogSource {
    fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.values
            .iter()
            .map(|name| Row::Name(name.as_str()))
            .chain(self.records.iter().map(Row::Record))
    }
}

enum Row<'a> {
    Name(&'a str),
    Record(&'a BTreeMap<String, Value>),
}

impl Row<'_> {
    fn attribute(&self, key: &str) -> Option<String> {
        match self {
            Row::Name(name) if key == NAME_FIELD => Some((*name).to_string()),
            Row::Name(_) => None,
            Row::Record(record) => record.get(key).and_then(value_text),
        }
    }
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Candidate store keyed by category name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    sources: BTreeMap<String, CatalogSource>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ReportError::io(path, e))?;
        let catalog: Self = toml::from_str(&content).map_err(|e| ReportError::toml(path, e))?;
        tracing::debug!(
            path = %path.display(),
            sources = catalog.sources.len(),
            "loaded candidate catalog"
        );
        Ok(catalog)
    }

    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Add plain names to a category.
    #[must_use]
    pub fn with_values<I, S>(mut self, doctype: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sources
            .entry(doctype.into())
            .or_default()
            .values
            .extend(values.into_iter().map(Into::into));
        self
    }

    /// Add one record to a category.
    #[must_use]
    pub fn with_record<I, K, V>(mut self, doctype: impl Into<String>, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let record = attributes
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.sources
            .entry(doctype.into())
            .or_default()
            .records
            .push(record);
        self
    }

    pub fn doctypes(&self) -> impl Iterator<Item = &str> {
        self.sources.keys().map(String::as_str)
    }
}

impl CandidateFetcher for Catalog {
    fn fetch(&self, request: &FetchRequest) -> std::result::Result<Vec<String>, FetchError> {
        let source = self
            .sources
            .get(&request.doctype)
            .ok_or_else(|| FetchError::UnknownSource(request.doctype.clone()))?;
        let field = request.field.as_deref().unwrap_or(NAME_FIELD);
        let distinct = request.field.is_some();

        let mut seen = BTreeSet::new();
        let mut out = Vec::new();
        for row in source.rows() {
            let matches = request
                .filters
                .iter()
                .all(|(key, expected)| row.attribute(key).as_deref() == Some(expected.as_str()));
            if !matches {
                continue;
            }
            let Some(value) = row.attribute(field) else {
                continue;
            };
            if distinct && !seen.insert(value.clone()) {
                continue;
            }
            out.push(value);
            if request.limit.is_some_and(|limit| out.len() >= limit) {
                break;
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[sources."Item Group"]
values = ["All Item Groups", "HOUSEWARE.KITCHEN", "HOUSEWARE.DINING"]

[[sources.User.records]]
name = "ops@example.com"
user_type = "System User"

[[sources.User.records]]
name = "shop@example.com"
user_type = "Website User"

[[sources.Warehouse.records]]
name = "Main Store - AM"
is_group = 0
disabled = 0

[[sources.Warehouse.records]]
name = "All Warehouses - AM"
is_group = 1
disabled = 0
"#;

    fn catalog() -> Catalog {
        Catalog::from_toml_str(SAMPLE).expect("parse catalog")
    }

    #[test]
    fn plain_values_are_names() {
        let names = catalog().fetch(&FetchRequest::new("Item Group")).unwrap();
        assert_eq!(names.len(), 3);
        assert_eq!(names[0], "All Item Groups");
    }

    #[test]
    fn filters_compare_text_form() {
        let mut request = FetchRequest::new("Warehouse");
        request.filters.insert("is_group".into(), "0".into());
        let names = catalog().fetch(&request).unwrap();
        assert_eq!(names, vec!["Main Store - AM".to_string()]);
    }

    #[test]
    fn string_filters() {
        let mut request = FetchRequest::new("User");
        request
            .filters
            .insert("user_type".into(), "System User".into());
        assert_eq!(
            catalog().fetch(&request).unwrap(),
            vec!["ops@example.com".to_string()]
        );
    }

    #[test]
    fn limit_truncates() {
        let mut request = FetchRequest::new("Item Group");
        request.limit = Some(2);
        assert_eq!(catalog().fetch(&request).unwrap().len(), 2);
    }

    #[test]
    fn unknown_doctype_is_an_error() {
        assert_eq!(
            catalog().fetch(&FetchRequest::new("Brand")).unwrap_err(),
            FetchError::UnknownSource("Brand".to_string())
        );
    }

    #[test]
    fn distinct_field_values() {
        let catalog = Catalog::new()
            .with_record("Item", [("name", "A"), ("custom_year", "2024")])
            .with_record("Item", [("name", "B"), ("custom_year", "2025")])
            .with_record("Item", [("name", "C"), ("custom_year", "2024")])
            .with_record("Item", [("name", "D")]);
        let mut request = FetchRequest::new("Item");
        request.field = Some("custom_year".into());
        assert_eq!(
            catalog.fetch(&request).unwrap(),
            vec!["2024".to_string(), "2025".to_string()]
        );
    }
}
