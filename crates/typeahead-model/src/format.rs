//! Declarative cell-format rules for report rows.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// CSS weight used for emphasized totals.
pub const BOLD: u16 = 700;

fn default_bold() -> u16 {
    BOLD
}

/// A numeric band of a [`FormatRule::Thresholds`] rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdBand {
    pub min: f64,
    /// Whether a value equal to `min` falls in the band.
    #[serde(default = "default_inclusive")]
    pub inclusive: bool,
    pub color: String,
}

fn default_inclusive() -> bool {
    true
}

impl ThresholdBand {
    pub fn at_least(min: f64, color: impl Into<String>) -> Self {
        Self {
            min,
            inclusive: true,
            color: color.into(),
        }
    }

    pub fn above(min: f64, color: impl Into<String>) -> Self {
        Self {
            min,
            inclusive: false,
            color: color.into(),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        if self.inclusive {
            value >= self.min
        } else {
            value > self.min
        }
    }
}

/// Row-formatting rule. Rules apply in declaration order, each wrapping the
/// output of the previous one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FormatRule {
    /// Weight every cell of `column`.
    EmphasizeColumn {
        column: String,
        #[serde(default = "default_bold")]
        weight: u16,
    },
    /// Weight every cell of rows where `field` equals `equals`.
    EmphasizeRow {
        field: String,
        equals: String,
        #[serde(default = "default_bold")]
        weight: u16,
    },
    /// Colour `column` by the first band containing its numeric value.
    Thresholds {
        column: String,
        bands: Vec<ThresholdBand>,
    },
    /// Colour `column` when its numeric value is below zero.
    Negative { column: String, color: String },
    /// Colour `column` by its text value.
    StatusColors {
        column: String,
        colors: BTreeMap<String, String>,
        fallback: String,
    },
}

impl FormatRule {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmphasizeColumn { .. } => "emphasize_column",
            Self::EmphasizeRow { .. } => "emphasize_row",
            Self::Thresholds { .. } => "thresholds",
            Self::Negative { .. } => "negative",
            Self::StatusColors { .. } => "status_colors",
        }
    }
}
