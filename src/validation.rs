//! Request validation rules.
//!
//! Key names may contain only lowercase ASCII letters and dots, between 1 and
//! 255 characters. The whole name must match; nothing is truncated.

use regex::Regex;
use std::sync::OnceLock;

/// Maximum length of a key name, matching the `VARCHAR(255)` column.
pub const MAX_KEY_NAME_LEN: usize = 255;

static KEY_NAME_REGEX: OnceLock<Regex> = OnceLock::new();

fn key_name_regex() -> &'static Regex {
    KEY_NAME_REGEX.get_or_init(|| {
        Regex::new(&format!(r"^[a-z.]{{1,{}}}$", MAX_KEY_NAME_LEN))
            .expect("key name pattern is valid")
    })
}

/// Validate a candidate key name.
///
/// Returns the accepted name, or `None` if the name is absent, empty, too long
/// or contains anything other than `a-z` and `.`.
pub fn validate_key_name(name: Option<&str>) -> Option<&str> {
    let name = name?;
    key_name_regex().is_match(name).then_some(name)
}

/// Locale codes are exactly two ASCII letters (e.g. "en", "ko"), matching the
/// `VARCHAR(2)` column.
pub fn validate_locale(locale: &str) -> bool {
    locale.len() == 2 && locale.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Check that the locale detected from a value agrees with the requested one.
pub fn locale_matches(requested: &str, detected: &str) -> bool {
    requested == detected
}

/// Treat empty strings the same as a missing field.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
