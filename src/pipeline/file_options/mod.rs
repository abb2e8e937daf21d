//! Generator switches forced on every file before fields are renamed.
//!
//! The generated code must not import the gogoproto runtime, and the fast
//! marshal path needs sizer, marshaler and unmarshaler together. A value the
//! file already sets explicitly is left alone.
use tracing::debug;

use super::descriptor::{FileDescriptor, FileOptions};

//==================================================================================DEFAULTS
/// Value applied to each option when the file leaves it unset.
pub const GOGOPROTO_IMPORT: bool = false;
pub const SIZER_ALL: bool = true;
pub const MARSHALER_ALL: bool = true;
pub const UNMARSHALER_ALL: bool = true;

/// Fill unset options of `file`. Returns how many options were set.
pub fn apply_file_defaults(file: &mut FileDescriptor) -> usize {
    let applied = apply_option_defaults(&mut file.options);
    if applied > 0 {
        debug!(file = %file.name, applied, "applied file option defaults");
    }
    applied
}

fn apply_option_defaults(options: &mut FileOptions) -> usize {
    [
        set_if_unset(&mut options.gogoproto_import, GOGOPROTO_IMPORT),
        set_if_unset(&mut options.sizer_all, SIZER_ALL),
        set_if_unset(&mut options.marshaler_all, MARSHALER_ALL),
        set_if_unset(&mut options.unmarshaler_all, UNMARSHALER_ALL),
    ]
    .into_iter()
    .filter(|set| *set)
    .count()
}

fn set_if_unset(slot: &mut Option<bool>, value: bool) -> bool {
    if slot.is_some() {
        return false;
    }
    *slot = Some(value);
    true
}

#[cfg(test)]
mod tests;
