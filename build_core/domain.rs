use serde::Deserialize;

//==================================================================================MANIFEST
// Structures to deserialize `initialisms.json`.
#[derive(Debug, Deserialize)]
/// Word lists baked into the crate as its default dictionary.
pub(crate) struct InitialismManifest {
    pub(crate) initialisms: Vec<String>,
    #[serde(default)]
    pub(crate) camel_exceptions: Vec<CamelException>,
}

#[derive(Debug, Deserialize)]
/// A snake_case word whose camel form cannot be derived by casing rules alone.
pub(crate) struct CamelException {
    pub(crate) word: String,
    pub(crate) replacement: String,
}
