//! Cargo build script: generates the default initialism table.

mod build_core;
use crate::build_core::{
    conf::*, domain::InitialismManifest, errors::BuildError,
    gen_initialisms::run_initialisms_gen,
};

use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

// The curated word list lives in a JSON manifest so it can be reviewed and
// extended without touching Rust code. This script validates the manifest and
// turns it into `&'static` tables that `src/naming/initialisms` pulls in with
// `include!`.

//==================================================================================MAIN
fn main() -> Result<(), BuildError> {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed={INITIALISMS_MANIFEST_PATH}");

    // 1. Load the manifest.
    let manifest_path =
        PathBuf::from_str(INITIALISMS_MANIFEST_PATH).map_err(|_| BuildError::ReadPath {
            path: INITIALISMS_MANIFEST_PATH,
        })?;

    let manifest_string =
        fs::read_to_string(&manifest_path).map_err(|e| BuildError::ReadFile {
            path: manifest_path.to_path_buf(),
            source: e,
        })?;
    let manifest: InitialismManifest = serde_json::from_str(&manifest_string)?;

    // 2. Validate and render the tables.
    let buffer_code = run_initialisms_gen(&manifest)?;

    // 3. Write the generated code into `OUT_DIR`.
    let out_dir_str = std::env::var("OUT_DIR").map_err(|e| BuildError::OutDirErr { source: e })?;
    let dest_path = PathBuf::from(out_dir_str).join(OUT_DIR_INITIALISMS_FILE_NAME);

    fs::write(&dest_path, &buffer_code).map_err(|e| BuildError::WriteFile {
        path: dest_path,
        source: e,
    })?;

    Ok(())
}
