//! Paths and constants used during build-time code generation.
//==================================================================================CONF
/// Curated list of initialisms and snake_case exceptions.
pub(crate) const INITIALISMS_MANIFEST_PATH: &str = "build_core/var/initialisms.json";
/// Generated table file name (written to `OUT_DIR`).
pub(crate) const OUT_DIR_INITIALISMS_FILE_NAME: &str = "generated_initialisms.rs";
