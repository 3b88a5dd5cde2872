//! Configuration access and validation for the endpoint agent.
//!
//! This crate loads the agent's INI configuration file, exposes its sections
//! and values with typed lookup failures, and provides pure validators that
//! classify raw values against the constraints the agent expects.

pub mod constants;
mod loader;
pub mod schema;
pub mod validators;

pub use loader::{ConfigError, ConfigReader, ConfigSource, Section, env_var_or_none};
pub use schema::{KESL_SCHEMA, KeySpec, Outcome, Rule, ValidationReport};

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
