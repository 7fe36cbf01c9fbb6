use std::fs;

use picker_engine::{load_dataset, parse_dataset, LoadError};
use tempfile::TempDir;

#[test]
fn loads_and_normalizes_dataset_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("data.json");
    fs::write(
        &path,
        r#"[
            {"industry": " tech ", "niches": ["Web", "AI", "Web", " "]},
            {"industry": "Agriculture", "niches": ["Dairy"]},
            {"industry": "", "niches": ["Orphan"]},
            {"industry": "Empty", "niches": []},
            {"niches": ["No industry"]},
            "not a record"
        ]"#,
    )
    .unwrap();

    let dataset = load_dataset(&path).unwrap();
    let industries: Vec<_> = dataset.industries().collect();
    assert_eq!(industries, vec!["Agriculture", "tech"]);
    assert_eq!(
        dataset.niches("tech"),
        Some(&["AI".to_string(), "Web".to_string()][..])
    );
}

#[test]
fn missing_file_is_an_io_error() {
    let temp = TempDir::new().unwrap();
    let err = load_dataset(&temp.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = parse_dataset("[{\"industry\": ").unwrap_err();
    assert!(matches!(err, LoadError::Parse(_)));
}

#[test]
fn non_array_top_level_is_rejected() {
    let err = parse_dataset(r#"{"industry": "Tech", "niches": ["AI"]}"#).unwrap_err();
    assert!(matches!(err, LoadError::NotAnArray));
}

#[test]
fn empty_array_is_an_empty_dataset() {
    assert!(parse_dataset("[]").unwrap().is_empty());
}
