//! Reading candidate lists and report rows from disk.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use serde_json::Value;
use typeahead_model::DisplayKey;
use typeahead_report::Row;

/// Layout of a candidate list file, picked from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateFormat {
    /// JSON array of strings.
    Json,
    /// CSV with a `name` column, or the first column otherwise.
    Csv,
    /// One candidate per line.
    Lines,
}

impl CandidateFormat {
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("json") => Self::Json,
            Some("csv") => Self::Csv,
            _ => Self::Lines,
        }
    }
}

pub fn read_candidates(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_candidates(&content, CandidateFormat::from_path(path))
        .with_context(|| format!("parse candidates from {}", path.display()))
}

pub fn parse_candidates(content: &str, format: CandidateFormat) -> Result<Vec<String>> {
    match format {
        CandidateFormat::Json => {
            let values: Vec<String> = serde_json::from_str(content)?;
            Ok(values)
        }
        CandidateFormat::Csv => parse_csv(content),
        CandidateFormat::Lines => Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()),
    }
}

fn parse_csv(content: &str) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());
    let column = reader
        .headers()?
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case("name"))
        .unwrap_or(0);

    let mut out = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(value) = record.get(column).map(str::trim)
            && !value.is_empty()
        {
            out.push(value.to_string());
        }
    }
    Ok(out)
}

/// Read report rows from a JSON array of objects.
pub fn read_rows(path: &Path) -> Result<Vec<Row>> {
    let content = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_rows(&content).with_context(|| format!("parse rows from {}", path.display()))
}

pub fn parse_rows(content: &str) -> Result<Vec<Row>> {
    let values: Vec<Value> = serde_json::from_str(content)?;
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| match value {
            Value::Object(row) => Ok(row),
            other => Err(anyhow!("row {index} is not an object: {other}")),
        })
        .collect()
}

/// Parse a display key argument: `identity`, `last` or `segment:N`.
pub fn parse_display(spec: &str, separator: Option<char>) -> Result<DisplayKey> {
    let key = match spec.trim() {
        "identity" => DisplayKey::Identity,
        "last" => DisplayKey::last_segment(),
        other => {
            let Some(index) = other.strip_prefix("segment:") else {
                bail!("unknown display key '{other}' (expected identity, last or segment:N)");
            };
            let index: usize = index
                .parse()
                .with_context(|| format!("invalid segment index '{index}'"))?;
            DisplayKey::segment(index)
        }
    };
    Ok(match (key, separator) {
        (DisplayKey::LastSegment { .. }, Some(separator)) => DisplayKey::LastSegment { separator },
        (DisplayKey::Segment { index, .. }, Some(separator)) => {
            DisplayKey::Segment { separator, index }
        }
        (key, _) => key,
    })
}

/// Inverse of [`parse_display`], for listings.
pub fn describe_display(key: DisplayKey) -> String {
    match key {
        DisplayKey::Identity => "identity".to_string(),
        DisplayKey::LastSegment { separator: '.' } => "last".to_string(),
        DisplayKey::LastSegment { separator } => format!("last ({separator})"),
        DisplayKey::Segment {
            separator: '.',
            index,
        } => format!("segment:{index}"),
        DisplayKey::Segment { separator, index } => format!("segment:{index} ({separator})"),
    }
}
