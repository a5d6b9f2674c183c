//! Shipped report definitions.

use std::collections::BTreeMap;

use typeahead_model::{
    BOLD, CandidateSource, DefaultValue, DisplayKey, FieldType, FilterField, FormatRule,
    ReportDefinition, ThresholdBand,
};

const TOTAL_WEIGHT: u16 = 600;
const GRAND_TOTAL: &str = "Grand Total";

/// Statuses a material request moves through, with their display colours.
const MATERIAL_REQUEST_STATUSES: [(&str, &str); 5] = [
    ("Draft", "gray"),
    ("Pending", "orange"),
    ("Intransit", "blue"),
    ("Partially Ordered", "purple"),
    ("Completed", "green"),
];

pub(crate) fn reports() -> Vec<ReportDefinition> {
    vec![
        sales_summary_per_group(),
        sales_summary_per_stores(),
        sales_summary_per_suppliers(),
        summary_sales_by_brand_and_group(),
        material_request_details(),
        purchasing_sales_analysis_details(),
        item_sales_details_for_stores(),
        transfer_in(),
    ]
}

// Field names below are literals known to be valid; `validate` runs over
// all of them in the tests.
fn field(fieldname: &str, label: &str, fieldtype: FieldType) -> FilterField {
    FilterField {
        fieldname: fieldname.to_string(),
        label: label.to_string(),
        fieldtype,
        required: false,
        default: None,
        options: None,
        source: None,
        display: DisplayKey::Identity,
    }
}

fn datetime(fieldname: &str, label: &str) -> FilterField {
    field(fieldname, label, FieldType::Datetime)
}

fn multi_select(fieldname: &str, label: &str) -> FilterField {
    field(fieldname, label, FieldType::MultiSelectList)
}

fn link_select(fieldname: &str, label: &str, doctype: &str) -> FilterField {
    multi_select(fieldname, label).with_source(CandidateSource::link(doctype))
}

/// Link lookup that also names its category as the field's options.
fn link_list(fieldname: &str, label: &str, doctype: &str) -> FilterField {
    link_select(fieldname, label, doctype).with_options(doctype)
}

fn month_range() -> [FilterField; 2] {
    let start = DefaultValue::MonthStart {
        time: "00:00:01".to_string(),
    };
    let end = DefaultValue::MonthEnd {
        time: "23:59:59".to_string(),
    };
    [
        datetime("from_datetime", "From Date & Time").with_default(start),
        datetime("to_datetime", "To Date & Time").with_default(end),
    ]
}

fn last_week_range() -> [FilterField; 2] {
    let week_ago = DefaultValue::DaysAgo {
        days: 7,
        time: "00:00:00".to_string(),
    };
    let tonight = DefaultValue::Today {
        time: "23:59:59".to_string(),
    };
    [
        datetime("from_datetime", "From Date / Time")
            .required()
            .with_default(week_ago),
        datetime("to_datetime", "To Date / Time")
            .required()
            .with_default(tonight),
    ]
}

fn vendor_and_supplier() -> [FilterField; 2] {
    [
        link_select("vendor_code", "Vendor Code", "Brand"),
        link_select("supplier", "Supplier", "Supplier"),
    ]
}

fn item_group_pull() -> FilterField {
    let source = CandidateSource::list("Item Group");
    multi_select("item_group_filter", "Item Group").with_source(source)
}

fn emphasize_total_column() -> FormatRule {
    FormatRule::EmphasizeColumn {
        column: "total".to_string(),
        weight: TOTAL_WEIGHT,
    }
}

fn emphasize_row(field: &str, equals: &str) -> FormatRule {
    FormatRule::EmphasizeRow {
        field: field.to_string(),
        equals: equals.to_string(),
        weight: BOLD,
    }
}

fn report(name: &str, filters: impl IntoIterator<Item = FilterField>) -> ReportDefinition {
    filters
        .into_iter()
        .fold(ReportDefinition::new(name), ReportDefinition::with_filter)
}

fn sales_summary_per_group() -> ReportDefinition {
    let groups = link_list("item_group", "Item Group", "Item Group");
    report("Sales Summary Per Group", month_range())
        .with_filter(groups.with_display(DisplayKey::last_segment()))
        .with_filter(link_list("warehouse", "Warehouse", "Warehouse"))
        .with_rule(emphasize_total_column())
        .with_rule(emphasize_row("item_group", GRAND_TOTAL))
}

fn sales_summary_per_stores() -> ReportDefinition {
    report("Sales Summary Per Stores", month_range())
        .with_filter(link_list("warehouse", "Warehouse", "Warehouse"))
        .with_filter(link_list("cost_center", "Cost Center", "Cost Center"))
        .with_rule(emphasize_row("warehouse", "Total"))
}

fn sales_summary_per_suppliers() -> ReportDefinition {
    let groups = link_list("item_group", "Item Group", "Item Group");
    report("Sales Summary Per Suppliers", month_range())
        .with_filter(groups.with_display(DisplayKey::segment(2)))
        .with_filter(link_list("warehouse", "Warehouse", "Warehouse"))
        .with_rule(emphasize_total_column())
        .with_rule(emphasize_row("supplier", GRAND_TOTAL))
}

fn summary_sales_by_brand_and_group() -> ReportDefinition {
    report("Summary Sales By Brand And Group", month_range())
        .with_filter(link_list("warehouse", "Warehouse", "Warehouse"))
        .with_filter(link_list("brand", "Brand", "Brand"))
        .with_rule(emphasize_total_column())
        .with_rule(emphasize_row("item_group", GRAND_TOTAL))
}

fn material_request_details() -> ReportDefinition {
    let now_range = [
        datetime("from_datetime", "From Date / Time")
            .required()
            .with_default(DefaultValue::Now),
        datetime("to_datetime", "To Date / Time")
            .required()
            .with_default(DefaultValue::Now),
    ];
    let requests = link_list(
        "material_request_no",
        "Material Request No",
        "Material Request",
    );
    let users = CandidateSource::link_filtered("User", [("user_type", "System User")]);
    let created_user = multi_select("created_user", "Created User")
        .with_options("User")
        .with_source(users);
    let statuses = MATERIAL_REQUEST_STATUSES.map(|(status, _)| status);
    let status = multi_select("status", "Status").with_source(CandidateSource::fixed(statuses));
    let colors: BTreeMap<String, String> = MATERIAL_REQUEST_STATUSES
        .iter()
        .map(|(status, color)| ((*status).to_string(), (*color).to_string()))
        .collect();

    report("Material Request Details", now_range)
        .with_filter(requests)
        .with_filter(link_list("source_warehouse", "Source WH", "Warehouse"))
        .with_filter(created_user)
        .with_filter(link_list("items", "Items", "Item"))
        .with_filter(status)
        .with_rule(FormatRule::Thresholds {
            column: "per_percentage".to_string(),
            bands: vec![
                ThresholdBand::at_least(100.0, "green"),
                ThresholdBand::at_least(50.0, "orange"),
                ThresholdBand::above(0.0, "red"),
            ],
        })
        .with_rule(FormatRule::Negative {
            column: "difference".to_string(),
            color: "red".to_string(),
        })
        .with_rule(FormatRule::StatusColors {
            column: "status".to_string(),
            colors,
            fallback: "black".to_string(),
        })
}

fn purchasing_sales_analysis_details() -> ReportDefinition {
    let range = [
        datetime("from_datetime", "From Date / Time").required(),
        datetime("to_datetime", "To Date / Time").required(),
    ];
    let filters = range.into_iter().chain(vendor_and_supplier());
    let years = CandidateSource::distinct("Item", "custom_year");
    let zero_stock_label = "Include Zero Stock Items";
    let zero_stock = field("include_zero_stock", zero_stock_label, FieldType::Check)
        .with_default(DefaultValue::Flag { value: false });

    report("Purchasing & Sales & Analysis Details", filters)
        .with_filter(link_select("item_group", "Item Group", "Item Group"))
        .with_filter(multi_select("year", "Year").with_source(years))
        .with_filter(zero_stock)
}

fn item_sales_details_for_stores() -> ReportDefinition {
    let filters = last_week_range().into_iter().chain(vendor_and_supplier());
    let open_stores = [("is_group", "0"), ("disabled", "0")];
    let stores = CandidateSource::link_filtered("Warehouse", open_stores);
    report("Item Sales Details for Stores", filters)
        .with_filter(item_group_pull())
        .with_filter(link_select("item_code", "Items", "Item"))
        .with_filter(multi_select("warehouse", "Location").with_source(stores))
}

fn transfer_in() -> ReportDefinition {
    let filters = last_week_range().into_iter().chain(vendor_and_supplier());
    let target = field("target_warehouse", "Target Warehouse", FieldType::Link);
    let source = link_select("source_warehouse", "Source Warehouse", "Warehouse");
    report("Transfer IN", filters)
        .with_filter(item_group_pull())
        .with_filter(link_select("item_code", "Items", "Item"))
        .with_filter(target.with_options("Warehouse"))
        .with_filter(source)
}
