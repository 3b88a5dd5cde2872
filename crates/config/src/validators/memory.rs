//! Memory limit validator.
//!
//! A memory limit is either a sentinel word (`off` disables the limit, `auto`
//! lets the agent pick one) or a percentage in `(0, 100]`.

use super::numeric::is_float_in_range;
use crate::constants::{MEMORY_PERCENT_MAX, MEMORY_PERCENT_MIN, MEMORY_SENTINELS};

/// Returns true for `off`, `auto` (any case) or a percentage in `(0, 100]`.
pub fn is_valid_memory_value(value: &str) -> bool {
    let value = value.trim();
    let folded = value.to_lowercase();
    if MEMORY_SENTINELS.contains(&folded.as_str()) {
        return true;
    }
    is_float_in_range(value, MEMORY_PERCENT_MIN, MEMORY_PERCENT_MAX)
}
