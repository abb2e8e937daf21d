//! Workspace for the build script: manifest model and table generator.
pub mod conf;
pub mod domain;
pub mod errors;
pub mod gen_initialisms;
