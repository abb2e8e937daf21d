//! `namefix` library: turns machine-generated field names into idiomatic
//! exported identifiers. The core is a pure normalizer that splits a name
//! into words and applies a dictionary of common initialisms; the pipeline
//! modules wrap it into a naming pass over a JSON descriptor set.
//==================================================================================
/// Runtime configuration constants (environment variables, defaults).
pub mod conf;
/// Errors raised by the naming pass (I/O, JSON, custom dictionaries).
/// The normalizer itself is total and never fails.
pub mod error;
/// Identifier normalization: initialism table, word segmentation, per-word
/// casing, and the snake_case pre-step.
pub mod naming;
/// Descriptor model and the field naming pass built on top of [`naming`].
pub mod pipeline;
//==================================================================================
pub use naming::{InitialismTable, Normalizer};
