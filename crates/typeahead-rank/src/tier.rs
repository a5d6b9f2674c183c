use std::fmt;

/// Ranking class of a matching candidate. Lower sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// Candidate equals the query, ignoring case.
    Exact,
    /// Candidate starts with the query.
    Prefix,
    /// Candidate contains the query elsewhere, or the query is empty.
    Other,
}

impl Tier {
    /// Classify a lowercased candidate against a lowercased query.
    ///
    /// An empty query puts every candidate in [`Tier::Other`] so that the
    /// result is purely alphabetical.
    pub fn classify(candidate: &str, query: &str) -> Self {
        if query.is_empty() {
            Self::Other
        } else if candidate == query {
            Self::Exact
        } else if candidate.starts_with(query) {
            Self::Prefix
        } else {
            Self::Other
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Exact => "exact",
            Self::Prefix => "prefix",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_tiers() {
        assert_eq!(Tier::classify("shoes", "shoes"), Tier::Exact);
        assert_eq!(Tier::classify("shoes rack", "shoes"), Tier::Prefix);
        assert_eq!(Tier::classify("red shoes", "shoes"), Tier::Other);
        assert_eq!(Tier::classify("shoes", ""), Tier::Other);
    }

    #[test]
    fn tiers_order_best_first() {
        assert!(Tier::Exact < Tier::Prefix);
        assert!(Tier::Prefix < Tier::Other);
    }
}
