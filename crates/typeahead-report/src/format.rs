//! Cell formatting for report rows.
//!
//! Each [`FormatRule`] that applies to a cell wraps the current markup in a
//! styled `<span>`, so later rules end up outermost.

use serde_json::{Map, Value};
use typeahead_model::FormatRule;

/// A report row keyed by column fieldname.
pub type Row = Map<String, Value>;

/// Format one cell.
///
/// `rendered` is the host's default rendering of the cell. Without a row
/// (header and summary cells) it is returned unchanged.
pub fn format_cell(
    rules: &[FormatRule],
    column: &str,
    rendered: &str,
    row: Option<&Row>,
) -> String {
    let Some(row) = row else {
        return rendered.to_string();
    };
    rules
        .iter()
        .fold(rendered.to_string(), |markup, rule| apply(rule, column, markup, row))
}

/// Format every cell of `row`, in column order.
pub fn format_row(rules: &[FormatRule], row: &Row) -> Vec<(String, String)> {
    row.iter()
        .map(|(column, value)| {
            let rendered = cell_text(value);
            (column.clone(), format_cell(rules, column, &rendered, Some(row)))
        })
        .collect()
}

fn apply(rule: &FormatRule, column: &str, markup: String, row: &Row) -> String {
    match rule {
        FormatRule::EmphasizeColumn {
            column: target,
            weight,
        } if target == column => span(&format!("font-weight:{weight};"), &markup),
        FormatRule::EmphasizeRow {
            field,
            equals,
            weight,
        } if row.get(field).map(cell_text).as_deref() == Some(equals.as_str()) => {
            span(&format!("font-weight:{weight};"), &markup)
        }
        FormatRule::Thresholds {
            column: target,
            bands,
        } if target == column => {
            let value = numeric(row.get(column));
            match bands.iter().find(|band| band.contains(value)) {
                Some(band) => span(
                    &format!("color: {}; font-weight: bold;", band.color),
                    &markup,
                ),
                None => markup,
            }
        }
        FormatRule::Negative {
            column: target,
            color,
        } if target == column && numeric(row.get(column)) < 0.0 => {
            span(&format!("color: {color};"), &markup)
        }
        FormatRule::StatusColors {
            column: target,
            colors,
            fallback,
        } if target == column => {
            let status = row.get(column).map(cell_text).unwrap_or_default();
            let color = colors.get(&status).unwrap_or(fallback);
            span(&format!("color: {color}; font-weight: bold;"), &markup)
        }
        _ => markup,
    }
}

fn span(style: &str, inner: &str) -> String {
    format!(r#"<span style="{style}">{inner}</span>"#)
}

/// Plain-text rendering of a JSON cell value.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Numeric view of a cell; unparsable or missing values count as zero.
fn numeric(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}
