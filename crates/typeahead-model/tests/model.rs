use typeahead_model::{
    CandidateSource, DefaultValue, DisplayKey, FieldType, FilterField, FormatRule, ModelError,
    ReportDefinition,
};

fn item_group_field() -> FilterField {
    FilterField::new("item_group", "Item Group", FieldType::MultiSelectList)
        .unwrap()
        .with_source(CandidateSource::link("Item Group"))
        .with_display(DisplayKey::last_segment())
}

#[test]
fn report_lookup_by_fieldname() {
    let report = ReportDefinition::new("Sales Summary Per Group").with_filter(item_group_field());
    assert!(report.field("item_group").is_some());
    assert!(report.field("warehouse").is_none());
    assert!(report.validate().is_ok());
}

#[test]
fn duplicate_fields_are_rejected() {
    let report = ReportDefinition::new("Dupes")
        .with_filter(item_group_field())
        .with_filter(item_group_field());
    assert_eq!(
        report.validate().unwrap_err(),
        ModelError::DuplicateField {
            report: "Dupes".to_string(),
            field: "item_group".to_string(),
        }
    );
}

#[test]
fn empty_report_name_is_rejected() {
    let report = ReportDefinition::new("  ");
    assert_eq!(report.validate().unwrap_err(), ModelError::EmptyReportName);
}

#[test]
fn invalid_field_from_document_is_caught_by_validate() {
    let mut field = item_group_field();
    field.fieldname = "Item-Group".to_string();
    let report = ReportDefinition::new("Bad").with_filter(field);
    assert!(matches!(
        report.validate(),
        Err(ModelError::InvalidFieldName(name)) if name == "Item-Group"
    ));
}

#[test]
fn report_parses_from_toml() {
    let doc = r#"
name = "Stock Moves"
tree = true
initial_depth = 1

[[filters]]
fieldname = "from_datetime"
label = "From Date / Time"
fieldtype = "Datetime"
required = true
default = { kind = "days_ago", days = 7, time = "00:00:00" }

[[filters]]
fieldname = "item_group"
label = "Item Group"
fieldtype = "MultiSelectList"
source = { kind = "list", doctype = "Item Group" }
display = { kind = "segment", index = 2 }

[[formatter]]
kind = "emphasize_row"
field = "item_group"
equals = "Grand Total"
"#;
    let report: ReportDefinition = toml::from_str(doc).expect("parse report");
    assert_eq!(report.name, "Stock Moves");
    assert!(report.tree);
    assert_eq!(report.initial_depth, 1);
    assert_eq!(report.filters.len(), 2);

    let from = &report.filters[0];
    assert!(from.required);
    assert_eq!(
        from.default,
        Some(DefaultValue::DaysAgo {
            days: 7,
            time: "00:00:00".to_string(),
        })
    );

    let group = &report.filters[1];
    assert_eq!(group.source, Some(CandidateSource::list("Item Group")));
    assert_eq!(group.display, DisplayKey::segment(2));

    assert!(matches!(
        &report.formatter[0],
        FormatRule::EmphasizeRow { weight: 700, .. }
    ));
    assert!(report.validate().is_ok());
}
