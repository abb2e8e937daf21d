//! Per-word casing decision.
use std::borrow::Cow;

use super::initialisms::InitialismTable;

//==================================================================================WORD_POSITION
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Where a word sits inside its identifier.
pub enum WordPosition {
    /// First word: keeps a lowercase (unexported) leading convention.
    First,
    /// Any later word.
    Inner,
}

impl WordPosition {
    pub fn from_index(index: usize) -> Self {
        if index == 0 {
            Self::First
        } else {
            Self::Inner
        }
    }
}

//==================================================================================RESOLVE
/// Replacement text for one word.
///
/// 1. A known initialism becomes its uppercase form, or its lowercase form
///    when it is the first word and starts lowercase (`idToken` stays `id…`).
/// 2. Otherwise an all-lowercase inner word gets its first character
///    uppercased (`user_name` pieces → `Name`).
/// 3. Anything else is kept as is.
pub fn resolve_word<'a>(
    word: &'a str,
    position: WordPosition,
    table: &InitialismTable,
) -> Cow<'a, str> {
    if let Some(canonical) = table.canonical(word) {
        let starts_lower = word.chars().next().is_some_and(char::is_lowercase);
        if position == WordPosition::First && starts_lower {
            return Cow::Owned(canonical.to_ascii_lowercase());
        }
        return Cow::Owned(canonical.to_string());
    }

    if position == WordPosition::Inner && is_lowercase_word(word) {
        return capitalize_first(word);
    }

    Cow::Borrowed(word)
}

/// `true` when lowercasing would leave the word unchanged (digits and
/// underscores count as lowercase).
pub(crate) fn is_lowercase_word(word: &str) -> bool {
    word.chars().all(|c| {
        let mut lower = c.to_lowercase();
        lower.next() == Some(c) && lower.next().is_none()
    })
}

/// Uppercase the first character when it has a single-character uppercase
/// form; multi-character expansions (`ß` → `SS`) are left alone.
pub(crate) fn capitalize_first(word: &str) -> Cow<'_, str> {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return Cow::Borrowed(word);
    };

    let mut upper = first.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) if u != first => {
            let mut out = String::with_capacity(word.len());
            out.push(u);
            out.push_str(chars.as_str());
            Cow::Owned(out)
        }
        _ => Cow::Borrowed(word),
    }
}
