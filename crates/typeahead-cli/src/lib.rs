//! Library components of the typeahead CLI.

pub mod input;
pub mod logging;
