//! Identifier format validators (machine UUIDs, locale names).

use std::sync::OnceLock;

use regex::Regex;
use uuid::Uuid;
use uuid::fmt::Hyphenated;

/// Language and territory, optionally followed by a codeset: `en_US`, `ru-RU.UTF-8`.
const LOCALE_PATTERN: &str = r"^[a-zA-Z]{2}[_-][a-zA-Z]{2}(\.[\w-]+)?$";

fn locale_matcher() -> Option<&'static Regex> {
    static MATCHER: OnceLock<Option<Regex>> = OnceLock::new();
    MATCHER.get_or_init(|| Regex::new(LOCALE_PATTERN).ok()).as_ref()
}

/// Returns true if `value` is a UUID in canonical hyphenated form.
///
/// Any version and variant is accepted, in either letter case. The simple,
/// braced and URN encodings are rejected.
pub fn is_valid_uuid(value: &str) -> bool {
    let value = value.trim();
    value.len() == Hyphenated::LENGTH && Uuid::try_parse(value).is_ok()
}

/// Returns true if `value` looks like a POSIX locale name.
pub fn is_valid_locale(value: &str) -> bool {
    locale_matcher().is_some_and(|re| re.is_match(value.trim()))
}
