#![deny(unsafe_code)]

pub mod display;
pub mod error;
pub mod filter;
pub mod format;
pub mod report;
pub mod source;
pub mod suggestion;

pub use display::DisplayKey;
pub use error::{ModelError, Result};
pub use filter::{DefaultValue, FieldType, FilterField, validate_fieldname};
pub use format::{BOLD, FormatRule, ThresholdBand};
pub use report::ReportDefinition;
pub use source::{CandidateSource, DEFAULT_PAGE_LIMIT};
pub use suggestion::Suggestion;
