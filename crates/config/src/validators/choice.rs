//! Enumerated-word validators (booleans, package formats).

use crate::constants::{BOOLEAN_WORDS, PACKAGE_TYPES};

fn is_one_of(value: &str, words: &[&str]) -> bool {
    let folded = value.trim().to_lowercase();
    words.contains(&folded.as_str())
}

/// Returns true for `true`, `false`, `yes` or `no` in any letter case.
pub fn is_boolean(value: &str) -> bool {
    is_one_of(value, &BOOLEAN_WORDS)
}

/// Returns true for the `rpm` and `deb` package formats in any letter case.
pub fn is_valid_package_type(value: &str) -> bool {
    is_one_of(value, &PACKAGE_TYPES)
}

/// Maps an accepted boolean word to its truth value.
///
/// Returns `None` for anything [`is_boolean`] rejects.
pub fn parse_boolean(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" => Some(true),
        "false" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolean_is_case_insensitive_and_trimmed() {
        for value in ["true", "false", "yes", "no", "  YES ", "Yes", "No", "TRUE", "fAlSe"] {
            assert!(is_boolean(value), "{value:?} should be accepted");
        }
    }

    #[test]
    fn test_boolean_rejects_other_words() {
        for value in ["y", "n", "1", "0", "", "on", "off", "maybe", "yes please"] {
            assert!(!is_boolean(value), "{value:?} should be rejected");
        }
    }

    #[test]
    fn test_package_type() {
        assert!(is_valid_package_type("rpm"));
        assert!(is_valid_package_type("DEB"));
        assert!(is_valid_package_type(" Rpm\t"));
        assert!(!is_valid_package_type("zip"));
        assert!(!is_valid_package_type("rpm deb"));
        assert!(!is_valid_package_type(""));
    }

    #[test]
    fn test_parse_boolean_agrees_with_is_boolean() {
        assert_eq!(parse_boolean(" Yes "), Some(true));
        assert_eq!(parse_boolean("TRUE"), Some(true));
        assert_eq!(parse_boolean("no"), Some(false));
        assert_eq!(parse_boolean("False"), Some(false));
        assert_eq!(parse_boolean("perhaps"), None);

        for word in BOOLEAN_WORDS {
            assert!(parse_boolean(word).is_some());
        }
    }
}
