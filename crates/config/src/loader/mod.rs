//! Configuration loader for INI files.
//!
//! Responsibilities:
//! - Resolve the config file path (explicit > `CONFIG_PATH` > default).
//! - Load the file once into an immutable document.
//! - Provide section and value lookups with typed failures.
//!
//! Does NOT handle:
//! - Value validation (see `validators`).
//! - Reloading, watching, or writing the file back.

mod document;
mod env;
mod error;
mod reader;
mod source;

#[cfg(test)]
mod tests;

pub use document::Section;
pub use env::env_var_or_none;
pub use error::ConfigError;
pub use reader::ConfigReader;
pub use source::ConfigSource;
