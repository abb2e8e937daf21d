//! snake_case → camelCase pre-step applied before normalization.
//!
//! Each `_`-separated word is rewritten on its own: a fixed exception
//! (`oauth` → `OAuth`) wins, then a known initialism is uppercased, otherwise
//! the first character is uppercased. Empty words produced by repeated or
//! leading/trailing underscores disappear.
use super::initialisms::{InitialismTable, CAMEL_EXCEPTIONS};
use super::resolver::capitalize_first;

//==================================================================================CAMEL_STYLE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Casing applied to the first word.
pub enum CamelStyle {
    /// `user_id` → `UserID` (exported field names).
    #[default]
    Upper,
    /// `user_id` → `userID`: the first word is kept as written.
    Lower,
}

//==================================================================================CONVERSION
/// `user_id` → `UserID`.
pub fn snake_to_camel(name: &str, table: &InitialismTable) -> String {
    convert(name, table, CamelStyle::Upper)
}

/// `user_id` → `userID`.
pub fn snake_to_lower_camel(name: &str, table: &InitialismTable) -> String {
    convert(name, table, CamelStyle::Lower)
}

/// Convert with an explicit [`CamelStyle`].
pub fn convert(name: &str, table: &InitialismTable, style: CamelStyle) -> String {
    let mut out = String::with_capacity(name.len());

    for (index, word) in name.split('_').enumerate() {
        if let Some(replacement) = camel_exception(word) {
            out.push_str(replacement);
            continue;
        }

        let keep_first = index == 0 && style == CamelStyle::Lower;
        if keep_first {
            out.push_str(word);
        } else if let Some(canonical) = table.canonical(word) {
            out.push_str(canonical);
        } else {
            out.push_str(&capitalize_first(word));
        }
    }

    out
}

fn camel_exception(word: &str) -> Option<&'static str> {
    CAMEL_EXCEPTIONS
        .iter()
        .find(|(from, _)| *from == word)
        .map(|(_, to)| *to)
}
