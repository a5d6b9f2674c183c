use std::path::Path;

use anyhow::{Context, Result, anyhow};
use chrono::Local;
use tracing::{info, info_span};

use typeahead_cli::input::{parse_display, read_candidates, read_rows};
use typeahead_model::{ReportDefinition, Suggestion};
use typeahead_rank::Ranker;
use typeahead_report::{Catalog, ReportRegistry, Suggester, format_row, resolve_field_default};

use crate::cli::{FiltersArgs, FormatArgs, RankArgs, SuggestArgs};
use crate::summary::{FilterLine, filter_table, format_table, report_table, suggestion_table};

/// Built-in reports, with `extra` merged over them when given.
pub fn load_registry(extra: Option<&Path>) -> Result<ReportRegistry> {
    let mut registry = ReportRegistry::builtin();
    if let Some(path) = extra {
        registry
            .load_toml(path)
            .with_context(|| format!("load reports from {}", path.display()))?;
    }
    Ok(registry)
}

pub fn run_reports(registry: &ReportRegistry) -> Result<()> {
    println!("{}", report_table(registry.iter()));
    Ok(())
}

pub fn run_filters(registry: &ReportRegistry, args: &FiltersArgs) -> Result<()> {
    let report = find_report(registry, &args.report)?;
    let now = Local::now().naive_local();
    let mut lines = Vec::with_capacity(report.filters.len());
    for field in &report.filters {
        let default = resolve_field_default(field, now)?;
        lines.push(FilterLine { field, default });
    }
    println!("Report: {}", report.name);
    println!("{}", filter_table(&lines));
    Ok(())
}

pub fn run_suggest(registry: ReportRegistry, args: &SuggestArgs) -> Result<()> {
    let catalog = Catalog::load(&args.catalog).context("load candidate catalog")?;
    let mut suggester = Suggester::new(registry, catalog);
    if let Some(limit) = args.limit {
        suggester = suggester.with_limit(limit);
    }
    let suggestions = suggester.suggest(&args.report, &args.field, &args.query)?;
    print_suggestions(&suggestions, args.json)
}

pub fn run_rank(args: &RankArgs) -> Result<()> {
    let span = info_span!("rank", path = %args.candidates.display());
    let _guard = span.enter();
    let candidates = read_candidates(&args.candidates)?;
    info!(candidates = candidates.len(), "loaded candidate list");
    let display = parse_display(&args.display, args.separator)?;
    let mut ranker = Ranker::new().with_extractor(display);
    if let Some(limit) = args.limit {
        ranker = ranker.with_limit(limit);
    }
    let suggestions = ranker.rank(&candidates, &args.query);
    print_suggestions(&suggestions, args.json)
}

pub fn run_format(registry: &ReportRegistry, args: &FormatArgs) -> Result<()> {
    let report = find_report(registry, &args.report)?;
    let rows = read_rows(&args.rows)?;
    let formatted: Vec<_> = rows
        .iter()
        .map(|row| format_row(&report.formatter, row))
        .collect();
    println!("{}", format_table(&formatted));
    Ok(())
}

fn find_report<'a>(registry: &'a ReportRegistry, name: &str) -> Result<&'a ReportDefinition> {
    registry
        .get(name)
        .ok_or_else(|| anyhow!("unknown report: {name}"))
}

fn print_suggestions(suggestions: &[Suggestion], json: bool) -> Result<()> {
    if json {
        let payload = serde_json::to_string_pretty(suggestions).context("serialize suggestions")?;
        println!("{payload}");
    } else if suggestions.is_empty() {
        println!("No suggestions.");
    } else {
        println!("{}", suggestion_table(suggestions));
    }
    Ok(())
}
