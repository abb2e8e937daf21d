//! Unit tests for file option defaults.
use super::*;

#[test]
/// Unset options all receive their defaults.
fn test_defaults_on_empty_options() {
    let mut file = FileDescriptor::default();
    assert_eq!(apply_file_defaults(&mut file), 4);
    assert_eq!(file.options.gogoproto_import, Some(false));
    assert_eq!(file.options.sizer_all, Some(true));
    assert_eq!(file.options.marshaler_all, Some(true));
    assert_eq!(file.options.unmarshaler_all, Some(true));
}

#[test]
/// Explicit values win, including explicit `false`/`true` opposites.
fn test_explicit_values_kept() {
    let mut file = FileDescriptor::default();
    file.options.gogoproto_import = Some(true);
    file.options.marshaler_all = Some(false);
    assert_eq!(apply_file_defaults(&mut file), 2);
    assert_eq!(file.options.gogoproto_import, Some(true));
    assert_eq!(file.options.marshaler_all, Some(false));
    assert_eq!(file.options.sizer_all, Some(true));
}

#[test]
/// A second pass has nothing left to do.
fn test_second_pass_is_noop() {
    let mut file = FileDescriptor::default();
    apply_file_defaults(&mut file);
    let snapshot = file.clone();
    assert_eq!(apply_file_defaults(&mut file), 0);
    assert_eq!(file, snapshot);
}
