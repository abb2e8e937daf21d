//! Identifier normalization.
//!
//! ```text
//! raw snake_case ──snake::snake_to_camel──▶ camelCase ──Normalizer::normalize──▶ exported name
//! ```
//!
//! The normalizer is split into three stages: [`segmenter`] cuts the name
//! into word spans over a cleaned copy, [`resolver`] decides the text of each
//! word, and [`normalizer`] joins the results.
pub mod initialisms;
pub mod normalizer;
pub mod resolver;
pub mod segmenter;
pub mod snake;

pub use initialisms::InitialismTable;
pub use normalizer::Normalizer;
