//! Filter field declarations for a report.

use serde::{Deserialize, Serialize};

use crate::display::DisplayKey;
use crate::error::{ModelError, Result};
use crate::source::CandidateSource;

/// Widget type of a filter field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    Datetime,
    Date,
    Check,
    Link,
    Select,
    MultiSelectList,
}

impl FieldType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Datetime => "Datetime",
            Self::Date => "Date",
            Self::Check => "Check",
            Self::Link => "Link",
            Self::Select => "Select",
            Self::MultiSelectList => "MultiSelectList",
        }
    }

    /// Whether the widget offers typeahead suggestions.
    pub fn is_selectable(self) -> bool {
        matches!(self, Self::Link | Self::Select | Self::MultiSelectList)
    }
}

/// Default value expression, evaluated when the report opens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DefaultValue {
    /// First day of the current month at `time` (`HH:MM:SS`).
    MonthStart { time: String },
    /// Last day of the current month at `time`.
    MonthEnd { time: String },
    /// `days` before today at `time`.
    DaysAgo { days: u32, time: String },
    /// Today at `time`.
    Today { time: String },
    /// Current date and time.
    Now,
    Literal { value: String },
    Flag { value: bool },
}

/// One filter field of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterField {
    pub fieldname: String,
    pub label: String,
    pub fieldtype: FieldType,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultValue>,
    /// Linked category for `Link` fields without a typeahead source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<CandidateSource>,
    #[serde(default, skip_serializing_if = "DisplayKey::is_identity")]
    pub display: DisplayKey,
}

impl FilterField {
    pub fn new(
        fieldname: impl Into<String>,
        label: impl Into<String>,
        fieldtype: FieldType,
    ) -> Result<Self> {
        let fieldname = fieldname.into();
        validate_fieldname(&fieldname)?;
        Ok(Self {
            fieldname,
            label: label.into(),
            fieldtype,
            required: false,
            default: None,
            options: None,
            source: None,
            display: DisplayKey::Identity,
        })
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn with_default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }

    #[must_use]
    pub fn with_options(mut self, doctype: impl Into<String>) -> Self {
        self.options = Some(doctype.into());
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: CandidateSource) -> Self {
        self.source = Some(source);
        self
    }

    #[must_use]
    pub fn with_display(mut self, display: DisplayKey) -> Self {
        self.display = display;
        self
    }

    /// Source used for suggestions.
    ///
    /// A `Link` field declared only with `options` gets a plain link lookup.
    pub fn effective_source(&self) -> Option<CandidateSource> {
        match (&self.source, &self.options) {
            (Some(source), _) => Some(source.clone()),
            (None, Some(doctype)) if self.fieldtype.is_selectable() => {
                Some(CandidateSource::link(doctype.clone()))
            }
            _ => None,
        }
    }
}

/// Check that a field name is a lowercase snake identifier.
pub fn validate_fieldname(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid_start = chars.next().is_some_and(|c| c.is_ascii_lowercase());
    let valid_rest = chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
    if valid_start && valid_rest {
        Ok(())
    } else {
        Err(ModelError::InvalidFieldName(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_field_names() {
        for name in ["item_group", "per_percentage2"] {
            assert!(FilterField::new(name, "Label", FieldType::Link).is_ok());
        }
        assert_eq!(
            FilterField::new("Item Group", "Item Group", FieldType::Link).unwrap_err(),
            ModelError::InvalidFieldName("Item Group".to_string())
        );
        assert!(FilterField::new("", "Empty", FieldType::Link).is_err());
        assert!(FilterField::new("_x", "X", FieldType::Link).is_err());
    }

    #[test]
    fn options_imply_link_source() {
        let field = FilterField::new("target_warehouse", "Target Warehouse", FieldType::Link)
            .unwrap()
            .with_options("Warehouse");
        assert_eq!(
            field.effective_source(),
            Some(CandidateSource::link("Warehouse"))
        );
    }

    #[test]
    fn date_fields_have_no_source() {
        let field = FilterField::new("from_datetime", "From", FieldType::Datetime)
            .unwrap()
            .with_options("Warehouse");
        assert_eq!(field.effective_source(), None);
    }
}
