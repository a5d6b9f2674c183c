//! Integration tests for the CLI input readers.

use std::fs;
use std::path::Path;

use typeahead_cli::input::{
    CandidateFormat, describe_display, parse_candidates, parse_display, parse_rows, read_candidates,
};
use typeahead_model::DisplayKey;
use typeahead_rank::Ranker;

#[test]
fn format_follows_extension() {
    assert_eq!(
        CandidateFormat::from_path(Path::new("groups.JSON")),
        CandidateFormat::Json
    );
    assert_eq!(
        CandidateFormat::from_path(Path::new("groups.csv")),
        CandidateFormat::Csv
    );
    assert_eq!(
        CandidateFormat::from_path(Path::new("groups.txt")),
        CandidateFormat::Lines
    );
    assert_eq!(
        CandidateFormat::from_path(Path::new("groups")),
        CandidateFormat::Lines
    );
}

#[test]
fn csv_prefers_name_column() {
    let content = "item_group,Name,parent\n1,HOME.KITCHEN,HOME\n2,GARDEN,All\n3,,All\n";
    let values = parse_candidates(content, CandidateFormat::Csv).unwrap();
    insta::assert_json_snapshot!(values, @r#"
[
  "HOME.KITCHEN",
  "GARDEN"
]
"#);
}

#[test]
fn csv_without_name_uses_first_column() {
    let content = "warehouse,company\nMain Store - AM,AM\nBack Store - AM,AM\n";
    let values = parse_candidates(content, CandidateFormat::Csv).unwrap();
    assert_eq!(values, vec!["Main Store - AM", "Back Store - AM"]);
}

#[test]
fn lines_skip_blanks() {
    let values = parse_candidates("Shoes\r\n\n  Boots  \n", CandidateFormat::Lines).unwrap();
    assert_eq!(values, vec!["Shoes", "Boots"]);
}

#[test]
fn json_must_be_string_array() {
    assert!(parse_candidates(r#"["a", 1]"#, CandidateFormat::Json).is_err());
    assert_eq!(
        parse_candidates(r#"["a", "b"]"#, CandidateFormat::Json).unwrap(),
        vec!["a", "b"]
    );
}

#[test]
fn rows_must_be_objects() {
    let rows = parse_rows(r#"[{"status": "Draft"}, {"status": "Completed"}]"#).unwrap();
    assert_eq!(rows.len(), 2);
    let err = parse_rows(r#"[{"status": "Draft"}, 3]"#).unwrap_err();
    assert_eq!(err.to_string(), "row 1 is not an object: 3");
}

#[test]
fn display_arguments() {
    assert_eq!(
        parse_display("identity", None).unwrap(),
        DisplayKey::Identity
    );
    assert_eq!(
        parse_display("last", None).unwrap(),
        DisplayKey::last_segment()
    );
    assert_eq!(
        parse_display("segment:2", Some('/')).unwrap(),
        DisplayKey::Segment {
            separator: '/',
            index: 2
        }
    );
    assert!(parse_display("segment:x", None).is_err());
    assert!(parse_display("first", None).is_err());
}

#[test]
fn display_descriptions_round_trip() {
    for spec in ["identity", "last", "segment:3"] {
        let key = parse_display(spec, None).unwrap();
        assert_eq!(describe_display(key), spec);
    }
    assert_eq!(
        describe_display(DisplayKey::LastSegment { separator: '/' }),
        "last (/)"
    );
}

#[test]
fn ranks_candidate_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("groups.json");
    fs::write(&path, r#"["Electronics", "Electrical", "Furniture"]"#).unwrap();

    let candidates = read_candidates(&path).unwrap();
    let ranked = Ranker::new().rank(&candidates, "elec");
    let values: Vec<&str> = ranked.iter().map(|s| s.value.as_str()).collect();
    assert_eq!(values, vec!["Electrical", "Electronics"]);
}

#[test]
fn missing_candidate_file_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");
    let err = read_candidates(&path).unwrap_err();
    assert!(format!("{err:#}").contains("absent.txt"));
}
