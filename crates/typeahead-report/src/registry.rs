//! Registry of report definitions.
//!
//! Reports are keyed by name. Lookups try the exact name first and fall back
//! to an ASCII case-insensitive match.
//!
//! # Report files
//!
//! Extra reports are read from TOML documents holding a `reports` array:
//!
//! ```toml
//! [[reports]]
//! name = "Stock Moves"
//!
//! [[reports.filters]]
//! fieldname = "warehouse"
//! label = "Warehouse"
//! fieldtype = "MultiSelectList"
//! source = { kind = "link", doctype = "Warehouse" }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use typeahead_model::ReportDefinition;

use crate::builtin;
use crate::error::{ReportError, Result};

#[derive(Debug, Deserialize)]
struct ReportFile {
    #[serde(default)]
    reports: Vec<ReportDefinition>,
}

/// Parse the report definitions of a TOML document without validating them.
pub fn parse_reports(content: &str) -> std::result::Result<Vec<ReportDefinition>, toml::de::Error> {
    toml::from_str::<ReportFile>(content).map(|file| file.reports)
}

#[derive(Debug, Clone, Default)]
pub struct ReportRegistry {
    reports: BTreeMap<String, ReportDefinition>,
}

impl ReportRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the shipped report definitions.
    pub fn builtin() -> Self {
        let reports = builtin::reports()
            .into_iter()
            .map(|report| (report.name.clone(), report))
            .collect();
        Self { reports }
    }

    /// Validate and add a report, returning the definition it replaced.
    pub fn insert(&mut self, report: ReportDefinition) -> Result<Option<ReportDefinition>> {
        report.validate()?;
        Ok(self.reports.insert(report.name.clone(), report))
    }

    /// Add every report of a TOML file. Returns how many were added.
    ///
    /// Either all reports of the file are added or none are.
    pub fn load_toml(&mut self, path: &Path) -> Result<usize> {
        let content = fs::read_to_string(path).map_err(|e| ReportError::io(path, e))?;
        let reports = parse_reports(&content).map_err(|e| ReportError::toml(path, e))?;
        for report in &reports {
            report.validate()?;
        }
        let count = reports.len();
        for report in reports {
            if self.reports.insert(report.name.clone(), report).is_some() {
                tracing::debug!(path = %path.display(), "report definition replaced");
            }
        }
        tracing::info!(path = %path.display(), count, "loaded report definitions");
        Ok(count)
    }

    pub fn get(&self, name: &str) -> Option<&ReportDefinition> {
        self.reports.get(name).or_else(|| {
            self.reports
                .values()
                .find(|report| report.name.eq_ignore_ascii_case(name))
        })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.reports.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReportDefinition> {
        self.reports.values()
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}
