//! Generate the default initialism tables from the JSON manifest.
use std::collections::BTreeSet;
use std::fmt::Write;

use super::domain::*;
use super::errors::*;

/// Validate the manifest and emit the Rust source for both tables.
pub(crate) fn run_initialisms_gen(manifest: &InitialismManifest) -> Result<String, BuildError> {
    let initialisms = collect_initialisms(&manifest.initialisms)?;
    validate_exceptions(&manifest.camel_exceptions)?;

    let mut buffer = String::new();

    writeln!(
        buffer,
        "/// Common initialisms recognized by the default table, in canonical uppercase form."
    )?;
    writeln!(buffer, "pub const COMMON_INITIALISMS: &[&str] = &[")?;
    for word in &initialisms {
        writeln!(buffer, "    {word:?},")?;
    }
    writeln!(buffer, "];\n")?;

    writeln!(
        buffer,
        "/// snake_case words whose camel form is fixed regardless of casing rules."
    )?;
    writeln!(buffer, "pub const CAMEL_EXCEPTIONS: &[(&str, &str)] = &[")?;
    for exception in &manifest.camel_exceptions {
        writeln!(
            buffer,
            "    ({:?}, {:?}),",
            exception.word, exception.replacement
        )?;
    }
    writeln!(buffer, "];")?;

    Ok(buffer)
}

/// Sort and deduplicate-check the word list.
fn collect_initialisms(words: &[String]) -> Result<BTreeSet<&str>, BuildError> {
    let mut set = BTreeSet::new();
    for word in words {
        if !is_valid_initialism(word) {
            return Err(BuildError::InvalidInitialism {
                entry: word.clone(),
            });
        }
        if !set.insert(word.as_str()) {
            return Err(BuildError::DuplicateInitialism {
                entry: word.clone(),
            });
        }
    }
    Ok(set)
}

fn is_valid_initialism(word: &str) -> bool {
    !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}

fn validate_exceptions(exceptions: &[CamelException]) -> Result<(), BuildError> {
    for exception in exceptions {
        let word_ok = !exception.word.is_empty()
            && exception
                .word
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit());
        let replacement_ok = exception.replacement.is_ascii()
            && exception.replacement.eq_ignore_ascii_case(&exception.word);
        if !word_ok || !replacement_ok {
            return Err(BuildError::InvalidCamelException {
                word: exception.word.clone(),
            });
        }
    }
    Ok(())
}
