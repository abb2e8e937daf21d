//! Environment variables and defaults used outside the pure normalizer.
//==================================================================================CONF
/// Path to a JSON array of extra initialisms merged into the default table.
pub const INITIALISMS_PATH_ENV: &str = "NAMEFIX_INITIALISMS_PATH";
/// Log filter applied by the binary when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "namefix=info";
