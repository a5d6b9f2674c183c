//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "typeahead",
    version,
    about = "Typeahead suggestions for report filter fields",
    long_about = "Inspect report filter definitions and rank typeahead suggestions.\n\n\
                  Candidates come from a TOML catalog or a plain candidate list.\n\
                  Matches are ordered exact first, then prefix, then alphabetically."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Extra report definitions merged over the built-in reports.
    #[arg(long = "reports", value_name = "TOML", global = true)]
    pub reports: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List registered reports.
    Reports,

    /// Show the filter fields of a report.
    Filters(FiltersArgs),

    /// Suggest values for a report filter field.
    Suggest(SuggestArgs),

    /// Rank a candidate list against a query.
    Rank(RankArgs),

    /// Apply a report's cell formatting to rows.
    Format(FormatArgs),
}

#[derive(Parser)]
pub struct FiltersArgs {
    /// Report name (case-insensitive).
    #[arg(value_name = "REPORT")]
    pub report: String,
}

#[derive(Parser)]
pub struct SuggestArgs {
    /// Report name (case-insensitive).
    #[arg(value_name = "REPORT")]
    pub report: String,

    /// Filter field name.
    #[arg(value_name = "FIELD")]
    pub field: String,

    /// Text typed so far (empty lists every candidate).
    #[arg(value_name = "QUERY", default_value = "")]
    pub query: String,

    /// TOML catalog holding the candidate records.
    #[arg(long = "catalog", value_name = "TOML")]
    pub catalog: PathBuf,

    /// Maximum number of suggestions.
    #[arg(long = "limit", value_name = "N")]
    pub limit: Option<usize>,

    /// Print suggestions as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct RankArgs {
    /// Text typed so far (empty lists every candidate).
    #[arg(value_name = "QUERY", default_value = "")]
    pub query: String,

    /// Candidate list (.json array, .csv, or one candidate per line).
    #[arg(long = "candidates", value_name = "PATH")]
    pub candidates: PathBuf,

    /// Display key: identity, last, or segment:N.
    #[arg(long = "display", value_name = "KEY", default_value = "identity")]
    pub display: String,

    /// Segment separator for hierarchical names.
    #[arg(long = "separator", value_name = "CHAR")]
    pub separator: Option<char>,

    /// Maximum number of suggestions.
    #[arg(long = "limit", value_name = "N")]
    pub limit: Option<usize>,

    /// Print suggestions as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct FormatArgs {
    /// Report name (case-insensitive).
    #[arg(value_name = "REPORT")]
    pub report: String,

    /// JSON array of row objects.
    #[arg(long = "rows", value_name = "PATH")]
    pub rows: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
