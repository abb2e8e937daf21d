//! Unit tests for the pass runner and dictionary loading.
use super::*;
use serde_json::{json, Value};

#[test]
/// Options are defaulted and fields renamed in one run.
fn test_run_applies_both_steps() {
    let mut set: DescriptorSet = serde_json::from_value(json!({
        "files": [{
            "name": "a.proto",
            "messages": [{ "name": "A", "fields": [{ "name": "request_id" }] }]
        }]
    }))
    .unwrap();

    let report = run(&mut set, &FieldRewriter::default());
    assert_eq!(report.renamed, 1);
    assert_eq!(set.files[0].options.sizer_all, Some(true));
    assert_eq!(
        set.files[0].messages[0].fields[0].custom_name.as_deref(),
        Some("RequestID")
    );
}

#[test]
/// `process` streams JSON in and out.
fn test_process_round_trip() {
    let input = r#"{"files":[{"name":"a.proto","messages":[{"name":"A","fields":[{"name":"url"}]}]}]}"#;
    let mut output = Vec::new();
    let report = process(input.as_bytes(), &mut output, &FieldRewriter::default()).unwrap();
    assert_eq!(report.renamed, 1);

    let value: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(
        value["files"][0]["messages"][0]["fields"][0]["custom_name"],
        "URL"
    );
    assert_eq!(value["files"][0]["options"]["gogoproto_import"], false);
}

#[test]
/// Malformed input is reported as a JSON error.
fn test_process_rejects_bad_json() {
    let mut output = Vec::new();
    let err = process("{".as_bytes(), &mut output, &FieldRewriter::default()).unwrap_err();
    assert!(matches!(err, NamefixError::ParseJson(_)));
    assert!(output.is_empty());
}

#[test]
/// Extra words are merged and counted; invalid ones abort.
fn test_extend_from_json() {
    let mut table = InitialismTable::common();
    assert_eq!(extend_from_json(&mut table, r#"["sku", "ID"]"#).unwrap(), 1);
    assert!(table.contains("SKU"));

    assert!(matches!(
        extend_from_json(&mut table, r#"["ok", "not ok"]"#),
        Err(NamefixError::InvalidInitialism { .. })
    ));
    assert!(matches!(
        extend_from_json(&mut table, r#"{"a": 1}"#),
        Err(NamefixError::ParseJson(_))
    ));
}

#[test]
/// Missing explicit files are errors, not silent fallbacks.
fn test_load_table_explicit_missing_file() {
    let missing = Path::new("/definitely/not/here/initialisms.json");
    assert!(matches!(
        load_table(true, Some(missing)),
        Err(NamefixError::ReadFile { .. })
    ));
}

#[test]
/// Explicit files are merged into the requested base table.
fn test_load_table_explicit_file() {
    let path = std::env::temp_dir().join(format!("namefix-unit-{}.json", std::process::id()));
    std::fs::write(&path, r#"["grpc"]"#).unwrap();

    let table = load_table(false, Some(&path)).unwrap();
    assert_eq!(table.iter().collect::<Vec<_>>(), vec!["GRPC"]);

    let table = load_table(true, Some(&path)).unwrap();
    assert!(table.contains("GRPC") && table.contains("ID"));

    std::fs::remove_file(&path).unwrap();
}
