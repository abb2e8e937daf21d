//! Unit tests for the initialism dictionary.
use super::*;

#[test]
/// The generated table carries the curated list.
fn test_common_table_contents() {
    let table = InitialismTable::common();
    assert_eq!(table.len(), COMMON_INITIALISMS.len());
    for word in ["API", "ID", "HTTP", "HTTPS", "UTF8", "XSRF", "GUID"] {
        assert!(table.contains(word), "missing {word}");
    }
    assert!(!table.contains("AND"));
    assert_eq!(InitialismTable::default(), table);
}

#[test]
/// Generated entries are sorted and already canonical.
fn test_generated_entries_are_canonical() {
    assert!(COMMON_INITIALISMS.windows(2).all(|w| w[0] < w[1]));
    assert!(COMMON_INITIALISMS
        .iter()
        .all(|w| w.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())));
    assert!(CAMEL_EXCEPTIONS.contains(&("oauth", "OAuth")));
}

#[test]
/// Lookups ignore case and return the canonical form.
fn test_case_insensitive_lookup() {
    let table = InitialismTable::common();
    assert_eq!(table.canonical("id"), Some("ID"));
    assert_eq!(table.canonical("Http"), Some("HTTP"));
    assert_eq!(table.canonical("uTf8"), Some("UTF8"));
    assert_eq!(table.canonical("token"), None);
}

#[test]
/// Inserted words are stored uppercase and reported once.
fn test_insert_and_remove() {
    let mut table = InitialismTable::empty();
    assert!(table.is_empty());
    assert!(table.insert("grpc").unwrap());
    assert!(!table.insert("GRPC").unwrap());
    assert_eq!(table.iter().collect::<Vec<_>>(), vec!["GRPC"]);
    assert!(table.remove("Grpc"));
    assert!(!table.remove("grpc"));
    assert!(table.is_empty());
}

#[test]
/// Empty, non-ASCII, or punctuated entries are rejected.
fn test_insert_rejects_invalid_entries() {
    let mut table = InitialismTable::empty();
    for bad in ["", "Ü", "HTTP_2", "a b"] {
        assert!(matches!(
            table.insert(bad),
            Err(NamefixError::InvalidInitialism { .. })
        ));
    }
    assert!(table.is_empty());
}

#[test]
/// Bulk construction fails on the first invalid entry.
fn test_try_from_words() {
    let table = InitialismTable::try_from_words(["sku", "Vat"]).unwrap();
    assert!(table.contains("SKU"));
    assert!(table.contains("vat"));
    assert!(InitialismTable::try_from_words(["ok", ""]).is_err());
}

#[test]
/// Uppercase expansions that change the length never match an entry.
fn test_length_changing_uppercase_not_matched() {
    let table = InitialismTable::common();
    assert_eq!(table.canonical("ßh"), None);
    assert_eq!(table.canonical("ssh"), Some("SSH"));
}
