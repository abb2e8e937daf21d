//! Error definitions for the naming pass.
//! Each variant models one failure scenario of reading, rewriting or writing
//! a descriptor set. Name normalization has no failure mode of its own.
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
/// Errors surfaced by the pipeline and the `namefix` binary.
pub enum NamefixError {
    /// Unable to read an input file from disk.
    #[error("Failed to read file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Unable to write the output file.
    #[error("Failed to write file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input is not valid JSON for the expected document.
    #[error("Invalid JSON: {0}")]
    ParseJson(#[from] serde_json::Error),

    /// Stream-level I/O failure (stdin/stdout).
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Custom dictionary entry that cannot act as an initialism.
    #[error("Invalid initialism entry {entry:?}: expected a non-empty ASCII word")]
    InvalidInitialism { entry: String },
}
