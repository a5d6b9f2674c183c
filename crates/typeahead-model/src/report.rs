//! Report definitions: a named set of filters plus cell-format rules.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::filter::{FilterField, validate_fieldname};
use crate::format::FormatRule;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDefinition {
    pub name: String,
    #[serde(default)]
    pub filters: Vec<FilterField>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub formatter: Vec<FormatRule>,
    #[serde(default)]
    pub tree: bool,
    #[serde(default)]
    pub initial_depth: u32,
}

impl ReportDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            filters: Vec::new(),
            formatter: Vec::new(),
            tree: false,
            initial_depth: 0,
        }
    }

    #[must_use]
    pub fn with_filter(mut self, field: FilterField) -> Self {
        self.filters.push(field);
        self
    }

    #[must_use]
    pub fn with_rule(mut self, rule: FormatRule) -> Self {
        self.formatter.push(rule);
        self
    }

    pub fn field(&self, fieldname: &str) -> Option<&FilterField> {
        self.filters.iter().find(|f| f.fieldname == fieldname)
    }

    /// Check the name, every field name, and field-name uniqueness.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ModelError::EmptyReportName);
        }
        let mut seen = BTreeSet::new();
        for field in &self.filters {
            validate_fieldname(&field.fieldname)?;
            if !seen.insert(field.fieldname.as_str()) {
                return Err(ModelError::DuplicateField {
                    report: self.name.clone(),
                    field: field.fieldname.clone(),
                });
            }
        }
        Ok(())
    }
}
