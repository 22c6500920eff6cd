//! Integration tests for single-file CSV to JSON conversion

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

use csv2json::{convert_csv_file, ConversionConfig, ConversionEngine, ConversionError};

#[test]
fn test_round_trip_single_row() {
    let tmp = tempdir().unwrap();
    let csv_path = tmp.path().join("pair.csv");
    let json_path = tmp.path().join("pair.json");
    fs::write(&csv_path, "a,b\n1,2\n").unwrap();

    convert_csv_file(&csv_path, &json_path).unwrap();

    let written = fs::read_to_string(&json_path).unwrap();
    assert_eq!(
        written,
        "[\n    {\n        \"a\": \"1\",\n        \"b\": \"2\"\n    }\n]\n"
    );

    let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed, serde_json::json!([{"a": "1", "b": "2"}]));
}

#[test]
fn test_output_length_equals_data_rows() {
    let tmp = tempdir().unwrap();
    let csv_path = tmp.path().join("people.csv");
    let json_path = tmp.path().join("people.json");
    fs::write(&csv_path, "id,name\n1,Alice\n2,Bob\n3,Carol\n").unwrap();

    let metadata = convert_csv_file(&csv_path, &json_path).unwrap();
    assert_eq!(metadata.record_count, 3);

    let parsed: Vec<serde_json::Value> =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(parsed.len(), 3);
    assert_eq!(parsed[1]["name"], "Bob");
}

#[test]
fn test_keys_match_header_in_order() {
    let tmp = tempdir().unwrap();
    let csv_path = tmp.path().join("cols.csv");
    let json_path = tmp.path().join("cols.json");
    fs::write(&csv_path, "third,first,second\nc,a,b\n").unwrap();

    convert_csv_file(&csv_path, &json_path).unwrap();

    // preserve_order keeps object keys in parse order, so the written order
    // survives the read-back
    let parsed: Vec<serde_json::Value> =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    let keys: Vec<_> = parsed[0]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, vec!["third", "first", "second"]);
}

#[test]
fn test_quoted_comma_is_not_split() {
    let tmp = tempdir().unwrap();
    let csv_path = tmp.path().join("names.csv");
    let json_path = tmp.path().join("names.json");
    fs::write(&csv_path, "name,note\n\"Doe, Jane\",hello\n").unwrap();

    convert_csv_file(&csv_path, &json_path).unwrap();

    let parsed: Vec<serde_json::Value> =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(
        parsed[0],
        serde_json::json!({"name": "Doe, Jane", "note": "hello"})
    );
}

#[test]
fn test_non_ascii_preserved_literally() {
    let tmp = tempdir().unwrap();
    let csv_path = tmp.path().join("i18n.csv");
    let json_path = tmp.path().join("i18n.json");
    fs::write(&csv_path, "name\n日本語\n").unwrap();

    convert_csv_file(&csv_path, &json_path).unwrap();

    let written = fs::read_to_string(&json_path).unwrap();
    assert!(written.contains("日本語"));
    assert!(!written.contains("\\u"));

    let parsed: Vec<serde_json::Value> = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed, vec![serde_json::json!({"name": "日本語"})]);
}

#[test]
fn test_header_only_csv_becomes_empty_array() {
    let tmp = tempdir().unwrap();
    let csv_path = tmp.path().join("empty.csv");
    let json_path = tmp.path().join("empty.json");
    fs::write(&csv_path, "a,b,c\n").unwrap();

    let metadata = convert_csv_file(&csv_path, &json_path).unwrap();
    assert_eq!(metadata.record_count, 0);
    assert_eq!(fs::read_to_string(&json_path).unwrap(), "[]\n");
}

#[test]
fn test_unterminated_quote_rejected() {
    let tmp = tempdir().unwrap();
    let csv_path = tmp.path().join("broken.csv");
    fs::write(&csv_path, "a,b\n\"never closed,2\n").unwrap();

    let engine = ConversionEngine::new(ConversionConfig::default());
    let result = engine.convert(&csv_path);
    assert_matches!(
        result,
        Err(ConversionError::MalformedCsv { line: Some(2), .. })
    );
    assert!(!tmp.path().join("broken.json").exists());
}

#[test]
fn test_existing_destination_overwritten() {
    let tmp = tempdir().unwrap();
    let csv_path = tmp.path().join("data.csv");
    let json_path = tmp.path().join("data.json");
    fs::write(&csv_path, "a\nfresh\n").unwrap();
    fs::write(&json_path, "[\"stale\"]").unwrap();

    convert_csv_file(&csv_path, &json_path).unwrap();

    let parsed: Vec<serde_json::Value> =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(parsed[0]["a"], "fresh");
}
