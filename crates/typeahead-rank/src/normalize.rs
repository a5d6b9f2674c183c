//! Case folding and collation keys.

use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Lowercase form used for containment and tier checks.
pub fn fold_case(s: &str) -> String {
    if s.is_ascii() {
        s.to_ascii_lowercase()
    } else {
        s.to_lowercase()
    }
}

/// Sort key for alphabetical ordering of an already lowercased string.
///
/// Accented letters sort with their base letter: the string is decomposed
/// (NFD) and combining marks are dropped. ASCII input is returned borrowed.
pub fn collation_key(lower: &str) -> Cow<'_, str> {
    if lower.is_ascii() {
        return Cow::Borrowed(lower);
    }
    let stripped: String = lower.nfd().filter(|c| !is_combining_mark(*c)).collect();
    if stripped == lower {
        Cow::Borrowed(lower)
    } else {
        Cow::Owned(stripped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_case_handles_unicode() {
        assert_eq!(fold_case("Électronique"), "électronique");
        assert_eq!(fold_case("SHOES"), "shoes");
    }

    #[test]
    fn collation_strips_accents() {
        assert_eq!(collation_key("électronique"), "electronique");
        assert!(matches!(collation_key("plain"), Cow::Borrowed(_)));
        assert!(matches!(collation_key("日本"), Cow::Borrowed(_)));
    }
}
