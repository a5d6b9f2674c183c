//! Typeahead ranking for report filter fields.
//!
//! Given the candidate values of a filter field and the text the user has
//! typed so far, [`rank`] keeps the candidates containing the text and
//! orders them exact match first, then prefix matches, then alphabetically.
//! A [`Ranker`] adds a display-key extractor for hierarchical names and an
//! optional result cap.

#![deny(unsafe_code)]

pub mod extract;
pub mod normalize;
pub mod ranker;
pub mod tier;

pub use extract::{FnExtractor, KeyExtractor, from_fn};
pub use normalize::{collation_key, fold_case};
pub use ranker::{Ranker, rank};
pub use tier::Tier;
