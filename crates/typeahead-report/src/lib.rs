#![deny(unsafe_code)]

mod builtin;
pub mod catalog;
pub mod defaults;
pub mod error;
pub mod fetch;
pub mod format;
pub mod registry;
pub mod suggest;

pub use crate::catalog::{Catalog, CatalogSource};
pub use crate::defaults::{DATETIME_FORMAT, resolve_default, resolve_field_default};
pub use crate::error::{ReportError, Result};
pub use crate::fetch::{CandidateFetcher, FetchError, FetchRequest};
pub use crate::format::{Row, cell_text, format_cell, format_row};
pub use crate::registry::{ReportRegistry, parse_reports};
pub use crate::suggest::{Suggester, fetch_candidates, suggest_for_field};
