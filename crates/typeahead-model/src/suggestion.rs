use serde::{Deserialize, Serialize};

/// A single entry offered by a typeahead field.
///
/// `value` is what gets submitted; `label` is what the selection widget shows.
/// Input documents may spell the display text `description`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Suggestion {
    pub value: String,
    #[serde(alias = "description")]
    pub label: String,
}

impl Suggestion {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Suggestion whose label is the value itself.
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }
}
