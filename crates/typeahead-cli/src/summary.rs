use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use typeahead_cli::input::describe_display;
use typeahead_model::{FilterField, ReportDefinition, Suggestion};

pub fn report_table<'a>(reports: impl Iterator<Item = &'a ReportDefinition>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Report"),
        header_cell("Filters"),
        header_cell("Format rules"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for report in reports {
        table.add_row(vec![
            Cell::new(&report.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(report.filters.len()),
            count_cell(report.formatter.len()),
        ]);
    }
    table
}

/// One filter field with its resolved default, if any.
pub struct FilterLine<'a> {
    pub field: &'a FilterField,
    pub default: Option<String>,
}

pub fn filter_table(lines: &[FilterLine<'_>]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Label"),
        header_cell("Type"),
        header_cell("Required"),
        header_cell("Source"),
        header_cell("Display"),
        header_cell("Default"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Center);
    for line in lines {
        let field = line.field;
        let source = field
            .effective_source()
            .map_or_else(|| dim_cell("-"), |source| Cell::new(source.describe()));
        let display = if field.display.is_identity() {
            dim_cell("-")
        } else {
            Cell::new(describe_display(field.display))
        };
        table.add_row(vec![
            Cell::new(&field.fieldname).add_attribute(Attribute::Bold),
            Cell::new(&field.label),
            Cell::new(field.fieldtype.as_str()),
            if field.required {
                Cell::new("✓").fg(Color::Green)
            } else {
                dim_cell("-")
            },
            source,
            display,
            line.default
                .as_deref()
                .map_or_else(|| dim_cell("-"), Cell::new),
        ]);
    }
    table
}

pub fn suggestion_table(suggestions: &[Suggestion]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Value"),
        header_cell("Label"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, suggestion) in suggestions.iter().enumerate() {
        let label = if suggestion.label == suggestion.value {
            dim_cell(&suggestion.label)
        } else {
            Cell::new(&suggestion.label)
        };
        table.add_row(vec![
            dim_cell(index + 1),
            Cell::new(&suggestion.value),
            label,
        ]);
    }
    table
}

/// Formatted cells, one table line per cell.
pub fn format_table(rows: &[Vec<(String, String)>]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Column"),
        header_cell("Markup"),
    ]);
    apply_wide_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, cells) in rows.iter().enumerate() {
        for (column, markup) in cells {
            table.add_row(vec![
                dim_cell(index + 1),
                Cell::new(column),
                Cell::new(markup),
            ]);
        }
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_wide_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(165);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use typeahead_report::ReportRegistry;

    use super::*;

    #[test]
    fn report_table_has_a_row_per_report() {
        let registry = ReportRegistry::builtin();
        let table = report_table(registry.iter());
        assert_eq!(table.row_count(), 8);
    }

    #[test]
    fn suggestion_table_lists_in_order() {
        let table = suggestion_table(&[
            Suggestion::plain("Electrical"),
            Suggestion::plain("Electronics"),
        ]);
        assert_eq!(table.row_count(), 2);
        let rendered = table.to_string();
        let first = rendered.find("Electrical").unwrap();
        let second = rendered.find("Electronics").unwrap();
        assert!(first < second);
    }

    #[test]
    fn format_table_flattens_cells() {
        let rows = vec![
            vec![("a".to_string(), "1".to_string())],
            vec![
                ("a".to_string(), "2".to_string()),
                ("b".to_string(), "3".to_string()),
            ],
        ];
        assert_eq!(format_table(&rows).row_count(), 3);
    }
}
