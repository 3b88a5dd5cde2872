//! Numeric range validators.
//!
//! Integer bounds are inclusive on both ends. Float bounds are exclusive on
//! the lower end and inclusive on the upper end, so a range of `(0, 100]`
//! rejects zero but accepts one hundred.

use crate::constants::MINUTES_SUFFIX;

/// Returns true if `value` is a base-10 integer within `min..=max`.
pub fn is_int_in_range(value: &str, min: i64, max: i64) -> bool {
    match value.trim().parse::<i64>() {
        Ok(num) => min <= num && num <= max,
        Err(_) => false,
    }
}

/// Returns true if `value` is a decimal number within `(min, max]`.
///
/// `NaN` never satisfies the range.
pub fn is_float_in_range(value: &str, min: f64, max: f64) -> bool {
    match value.trim().parse::<f64>() {
        Ok(num) => min < num && num <= max,
        Err(_) => false,
    }
}

/// Returns true if `value` is an integer count of minutes such as `20m`,
/// with the count within `min..=max`.
///
/// The suffix is a literal lower-case `m`; any other unit is rejected.
pub fn is_valid_timeout_with_m(value: &str, min: i64, max: i64) -> bool {
    value
        .trim()
        .strip_suffix(MINUTES_SUFFIX)
        .is_some_and(|count| is_int_in_range(count, min, max))
}
