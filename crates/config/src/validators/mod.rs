//! Value validators for agent configuration entries.
//!
//! Responsibilities:
//! - Classify a raw configuration string against one constraint shape.
//! - Provide one predicate per value family (ranges, enumerations, formats,
//!   filesystem paths, memory limits).
//!
//! Does NOT handle:
//! - Looking values up in a document (see `loader`).
//! - Associating keys with constraints (see `schema`).
//!
//! Invariants:
//! - Every predicate is total over `&str`: malformed input yields `false`,
//!   never a panic or an error.
//! - Surrounding whitespace is ignored by every predicate.
//! - Float ranges exclude the lower bound and include the upper bound.

mod choice;
mod format;
mod memory;
mod numeric;
mod path;

pub use choice::{is_boolean, is_valid_package_type, parse_boolean};
pub use format::{is_valid_locale, is_valid_uuid};
pub use memory::is_valid_memory_value;
pub use numeric::{is_float_in_range, is_int_in_range, is_valid_timeout_with_m};
pub use path::is_existing_directory;
