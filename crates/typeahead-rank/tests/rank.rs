use typeahead_model::{DisplayKey, Suggestion};
use typeahead_rank::{Ranker, Tier, rank};

fn values(suggestions: &[Suggestion]) -> Vec<&str> {
    suggestions.iter().map(|s| s.value.as_str()).collect()
}

#[test]
fn shared_prefix_falls_back_to_alphabetical() {
    let ranked = rank(["Electronics", "Electrical", "Furniture"], "elec");
    assert_eq!(values(&ranked), vec!["Electrical", "Electronics"]);
}

#[test]
fn case_insensitive_exact_matches_lead() {
    let ranked = rank(["Shoes", "shoes", "Boots"], "shoes");
    assert_eq!(values(&ranked), vec!["Shoes", "shoes"]);
    for suggestion in &ranked {
        assert_eq!(
            Tier::classify(&suggestion.value.to_lowercase(), "shoes"),
            Tier::Exact
        );
    }
}

#[test]
fn empty_query_returns_everything_sorted() {
    let ranked = rank(["Furniture", "Electronics", "Electrical"], "");
    assert_eq!(
        values(&ranked),
        vec!["Electrical", "Electronics", "Furniture"]
    );
}

#[test]
fn non_matching_candidates_are_excluded() {
    let ranked = rank(["Furniture", "Garden"], "elec");
    assert!(ranked.is_empty());
}

#[test]
fn hierarchical_item_groups_show_last_segment() {
    let groups = [
        "All Item Groups",
        "HOUSEWARE.KITCHEN.KNIVES",
        "HOUSEWARE.KITCHEN",
        "GIFTS.KITCHEN",
        "HOUSEWARE.DINING.PLATES",
    ];
    let ranker = Ranker::new().with_extractor(DisplayKey::last_segment());
    let ranked = ranker.rank(groups, "kitchen");
    assert_eq!(
        ranked,
        vec![
            Suggestion::new("HOUSEWARE.KITCHEN", "KITCHEN"),
            Suggestion::new("HOUSEWARE.KITCHEN.KNIVES", "KNIVES"),
        ]
    );
}

#[test]
fn ranking_is_repeatable() {
    let candidates = vec!["b", "ab", "a", "ba", "abc"];
    let first = rank(&candidates, "a");
    let second = rank(&candidates, "a");
    assert_eq!(first, second);
    assert_eq!(values(&first), vec!["a", "ab", "abc", "ba"]);
}
