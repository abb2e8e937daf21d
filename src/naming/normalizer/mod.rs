//! Name assembler: segmentation, per-word resolution, join.
use super::initialisms::InitialismTable;
use super::resolver::{is_lowercase_word, resolve_word, WordPosition};
use super::segmenter::segment;

//==================================================================================NORMALIZER
#[derive(Debug, Clone, Default)]
/// Identifier normalizer holding its initialism dictionary.
///
/// The input is expected to already be camelCase (run
/// [`snake_to_camel`](crate::naming::snake::snake_to_camel) on raw
/// snake_case names first): an all-lowercase input is returned untouched, so
/// `user_id` would never gain its `ID`.
///
/// Normalization is total, deterministic and idempotent. A `Normalizer` is
/// immutable and can be shared across threads.
pub struct Normalizer {
    table: InitialismTable,
}

impl Normalizer {
    pub fn new(table: InitialismTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &InitialismTable {
        &self.table
    }

    /// Return the exported form of `name`.
    ///
    /// Names without any uppercase character (`id`, `http_status`, `v1_2`)
    /// are returned as is: only camelCase input is rewritten.
    ///
    /// ```
    /// use namefix::Normalizer;
    ///
    /// let normalizer = Normalizer::default();
    /// assert_eq!(normalizer.normalize("userId"), "userID");
    /// assert_eq!(normalizer.normalize("HttpStatus"), "HTTPStatus");
    /// assert_eq!(normalizer.normalize("idToken"), "idToken");
    /// ```
    pub fn normalize(&self, name: &str) -> String {
        if name == "_" || is_lowercase_word(name) {
            return name.to_string();
        }

        let mut out = String::with_capacity(name.len());
        for (index, word) in segment(name).words().enumerate() {
            out.push_str(&resolve_word(
                &word,
                WordPosition::from_index(index),
                &self.table,
            ));
        }
        out
    }
}

/// Normalize with the default dictionary.
pub fn normalize(name: &str) -> String {
    Normalizer::default().normalize(name)
}
