//! Naming pass over a descriptor set: file option defaults, then field
//! renaming. Also loads custom dictionaries from disk.
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::conf::INITIALISMS_PATH_ENV;
use crate::error::NamefixError;
use crate::naming::InitialismTable;

pub mod descriptor;
pub mod file_options;
pub mod rewriter;

use descriptor::DescriptorSet;
use file_options::apply_file_defaults;
use rewriter::{FieldRewriter, RewriteReport};

//==================================================================================RUN
/// Apply file defaults to every file, then rename eligible fields.
pub fn run(set: &mut DescriptorSet, rewriter: &FieldRewriter) -> RewriteReport {
    for file in &mut set.files {
        apply_file_defaults(file);
    }
    let report = rewriter.rewrite_set(set);
    info!(
        files = set.files.len(),
        renamed = report.renamed,
        skipped = report.skipped,
        "naming pass complete"
    );
    report
}

/// Read a JSON descriptor set, run the pass, write pretty JSON.
pub fn process<R: Read, W: Write>(
    reader: R,
    mut writer: W,
    rewriter: &FieldRewriter,
) -> Result<RewriteReport, NamefixError> {
    let mut set: DescriptorSet = serde_json::from_reader(reader)?;
    let report = run(&mut set, rewriter);
    serde_json::to_writer_pretty(&mut writer, &set)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(report)
}

//==================================================================================DICTIONARY
/// Parse a JSON array of words into `table`.
pub fn extend_from_json(table: &mut InitialismTable, json: &str) -> Result<usize, NamefixError> {
    let words: Vec<String> = serde_json::from_str(json)?;
    let mut added = 0;
    for word in &words {
        if table.insert(word)? {
            added += 1;
        }
    }
    Ok(added)
}

/// Merge the words listed in the JSON file at `path` into `table`.
pub fn extend_from_file(table: &mut InitialismTable, path: &Path) -> Result<usize, NamefixError> {
    let json = std::fs::read_to_string(path).map_err(|e| NamefixError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;
    let added = extend_from_json(table, &json)?;
    info!(path = %path.display(), added, "loaded extra initialisms");
    Ok(added)
}

/// Build the dictionary used by the binary.
///
/// Priority order for the extra word file:
///   1. `explicit_path` (command line)
///   2. the `NAMEFIX_INITIALISMS_PATH` environment variable, ignored with a
///      warning when the file does not exist
pub fn load_table(
    with_defaults: bool,
    explicit_path: Option<&Path>,
) -> Result<InitialismTable, NamefixError> {
    let mut table = if with_defaults {
        InitialismTable::common()
    } else {
        InitialismTable::empty()
    };

    if let Some(path) = explicit_path {
        extend_from_file(&mut table, path)?;
        return Ok(table);
    }

    if let Some(path) = std::env::var_os(INITIALISMS_PATH_ENV).map(PathBuf::from) {
        if path.exists() {
            extend_from_file(&mut table, &path)?;
        } else {
            warn!(
                path = %path.display(),
                "{INITIALISMS_PATH_ENV} points to a missing file, using the built-in table"
            );
        }
    }

    Ok(table)
}

#[cfg(test)]
mod tests;
