//! Cell formatting of the shipped report formatters.

use serde_json::{Value, json};
use typeahead_model::FormatRule;
use typeahead_report::{ReportRegistry, Row, format_cell, format_row};

fn rules(report: &str) -> Vec<FormatRule> {
    ReportRegistry::builtin()
        .get(report)
        .unwrap()
        .formatter
        .clone()
}

fn row(value: Value) -> Row {
    match value {
        Value::Object(map) => map,
        _ => panic!("row must be an object"),
    }
}

fn render(cells: &[(String, String)]) -> String {
    cells
        .iter()
        .map(|(column, markup)| format!("{column}: {markup}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn grand_total_row_nests_emphasis() {
    let rules = rules("Sales Summary Per Group");
    let total = row(json!({"item_group": "Grand Total", "total": 1500}));

    assert_eq!(
        format_cell(&rules, "total", "1500", Some(&total)),
        r#"<span style="font-weight:700;"><span style="font-weight:600;">1500</span></span>"#
    );
    assert_eq!(
        format_cell(&rules, "item_group", "Grand Total", Some(&total)),
        r#"<span style="font-weight:700;">Grand Total</span>"#
    );
}

#[test]
fn ordinary_row_only_weights_total_column() {
    let rules = rules("Sales Summary Per Group");
    let ordinary = row(json!({"item_group": "KITCHEN", "total": 20}));

    assert_eq!(
        format_cell(&rules, "total", "20", Some(&ordinary)),
        r#"<span style="font-weight:600;">20</span>"#
    );
    assert_eq!(
        format_cell(&rules, "item_group", "KITCHEN", Some(&ordinary)),
        "KITCHEN"
    );
}

#[test]
fn stores_total_row_is_bold() {
    let rules = rules("Sales Summary Per Stores");
    let total = row(json!({"warehouse": "Total", "net_sales": 99.5}));
    assert_eq!(
        format_cell(&rules, "net_sales", "99.5", Some(&total)),
        r#"<span style="font-weight:700;">99.5</span>"#
    );
}

#[test]
fn completion_percentage_bands() {
    let rules = rules("Material Request Details");
    let cell = |pct: f64| {
        let r = row(json!({ "per_percentage": pct }));
        format_cell(&rules, "per_percentage", &pct.to_string(), Some(&r))
    };

    assert_eq!(
        cell(100.0),
        r#"<span style="color: green; font-weight: bold;">100</span>"#
    );
    assert_eq!(
        cell(50.0),
        r#"<span style="color: orange; font-weight: bold;">50</span>"#
    );
    assert_eq!(
        cell(0.5),
        r#"<span style="color: red; font-weight: bold;">0.5</span>"#
    );
    assert_eq!(cell(0.0), "0");
}

#[test]
fn unknown_status_uses_fallback_color() {
    let rules = rules("Material Request Details");
    let r = row(json!({"status": "Cancelled"}));
    assert_eq!(
        format_cell(&rules, "status", "Cancelled", Some(&r)),
        r#"<span style="color: black; font-weight: bold;">Cancelled</span>"#
    );
}

#[test]
fn material_request_row() {
    let rules = rules("Material Request Details");
    let r = row(json!({
        "item_code": "ITM-001",
        "per_percentage": 75,
        "difference": -2,
        "status": "Pending"
    }));

    insta::assert_snapshot!(render(&format_row(&rules, &r)), @r#"
difference: <span style="color: red;">-2</span>
item_code: ITM-001
per_percentage: <span style="color: orange; font-weight: bold;">75</span>
status: <span style="color: orange; font-weight: bold;">Pending</span>
"#);
}

#[test]
fn reports_without_rules_pass_cells_through() {
    let rules = rules("Transfer IN");
    assert!(rules.is_empty());
    let r = row(json!({"qty": -4}));
    assert_eq!(format_cell(&rules, "qty", "-4", Some(&r)), "-4");
}
