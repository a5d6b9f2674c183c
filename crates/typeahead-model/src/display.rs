//! Display keys derived from hierarchical candidate names.
//!
//! Some link sources return dotted names such as `ELEC.TV.LED`. The
//! selection widget shows only one segment of that name, and suggestions
//! that share the shown segment collapse into one entry.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

fn default_separator() -> char {
    '.'
}

/// How the display label of a suggestion is derived from its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayKey {
    /// Show the value unchanged.
    #[default]
    Identity,
    /// Show the text after the last separator.
    LastSegment {
        #[serde(default = "default_separator")]
        separator: char,
    },
    /// Show the segment at `index` (zero-based).
    ///
    /// Values with too few segments are shown whole.
    Segment {
        #[serde(default = "default_separator")]
        separator: char,
        index: usize,
    },
}

impl DisplayKey {
    pub fn last_segment() -> Self {
        Self::LastSegment {
            separator: default_separator(),
        }
    }

    pub fn segment(index: usize) -> Self {
        Self::Segment {
            separator: default_separator(),
            index,
        }
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity)
    }

    /// Derive the display key for `value`.
    pub fn extract<'a>(&self, value: &'a str) -> Cow<'a, str> {
        match *self {
            Self::Identity => Cow::Borrowed(value),
            Self::LastSegment { separator } => {
                Cow::Borrowed(value.rsplit(separator).next().unwrap_or(value))
            }
            Self::Segment { separator, index } => {
                Cow::Borrowed(value.split(separator).nth(index).unwrap_or(value))
            }
        }
    }
}
