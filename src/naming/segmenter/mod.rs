//! Word segmentation over camelCase identifiers.
//!
//! A word ends at the last character, before a run of underscores, or where
//! a lowercase character is followed by a non-lowercase one. Consecutive
//! capitals therefore stay together: `myHTTPServer` yields `my` and
//! `HTTPServer`.
//!
//! Underscore runs are removed from the working copy, except that a run
//! sitting between two digits collapses to a single `_` which then opens the
//! following word (`v1__2` → `v`, `1`, `_2`).
use core::ops::Range;

//==================================================================================SEGMENTS
#[derive(Debug, Clone, PartialEq, Eq)]
/// Cleaned copy of an identifier plus the word spans that partition it.
pub struct Segments {
    chars: Vec<char>,
    spans: Vec<Range<usize>>,
}

impl Segments {
    /// The identifier after underscore runs were collapsed.
    pub fn cleaned(&self) -> String {
        self.chars.iter().collect()
    }

    /// Word spans, in order, as char indices into [`Segments::cleaned`].
    pub fn spans(&self) -> &[Range<usize>] {
        &self.spans
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Iterate over the words as owned strings.
    pub fn words(&self) -> impl Iterator<Item = String> + '_ {
        self.spans
            .iter()
            .map(move |span| self.chars[span.clone()].iter().collect())
    }
}

//==================================================================================SEGMENT
/// Split `name` into words.
///
/// The whole input is scanned; the fast paths (`"_"`, all-lowercase) are the
/// caller's business, see [`Normalizer::normalize`](crate::naming::Normalizer::normalize).
pub fn segment(name: &str) -> Segments {
    let src: Vec<char> = name.chars().collect();
    let mut chars = Vec::with_capacity(src.len());
    let mut spans = Vec::new();

    let mut start = 0;
    let mut i = 0;
    while i < src.len() {
        let current = src[i];
        chars.push(current);

        match src.get(i + 1) {
            None => {
                spans.push(start..chars.len());
                i += 1;
            }
            Some('_') => {
                spans.push(start..chars.len());

                let run_end = underscore_run_end(&src, i + 1);
                start = chars.len();
                if let Some(next) = src.get(run_end) {
                    if current.is_numeric() && next.is_numeric() {
                        chars.push('_');
                    }
                }
                i = run_end;
            }
            Some(next) if current.is_lowercase() && !next.is_lowercase() => {
                spans.push(start..chars.len());
                start = chars.len();
                i += 1;
            }
            Some(_) => i += 1,
        }
    }

    Segments { chars, spans }
}

/// Index of the first non-underscore at or after `from`.
fn underscore_run_end(src: &[char], from: usize) -> usize {
    src[from..]
        .iter()
        .position(|c| *c != '_')
        .map_or(src.len(), |offset| from + offset)
}
