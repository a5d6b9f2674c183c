//! Display-key extractors.

use std::borrow::Cow;

use typeahead_model::DisplayKey;

/// Derives the display key of a candidate value.
///
/// Suggestions are labelled with the extracted key and deduplicated on it.
pub trait KeyExtractor {
    fn extract<'a>(&self, value: &'a str) -> Cow<'a, str>;
}

impl KeyExtractor for DisplayKey {
    fn extract<'a>(&self, value: &'a str) -> Cow<'a, str> {
        DisplayKey::extract(self, value)
    }
}

impl<E: KeyExtractor + ?Sized> KeyExtractor for &E {
    fn extract<'a>(&self, value: &'a str) -> Cow<'a, str> {
        (**self).extract(value)
    }
}

/// Extractor backed by a closure.
#[derive(Debug, Clone, Copy)]
pub struct FnExtractor<F>(F);

/// Wrap a closure as a [`KeyExtractor`].
pub fn from_fn<F>(f: F) -> FnExtractor<F>
where
    F: Fn(&str) -> String,
{
    FnExtractor(f)
}

impl<F> KeyExtractor for FnExtractor<F>
where
    F: Fn(&str) -> String,
{
    fn extract<'a>(&self, value: &'a str) -> Cow<'a, str> {
        Cow::Owned((self.0)(value))
    }
}
