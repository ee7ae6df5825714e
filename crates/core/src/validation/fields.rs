//! Pure field predicates. Each returns `true` when the value is acceptable.

use std::sync::LazyLock;

use regex::Regex;

use crate::roles;

/// Characters of which a password must contain at least one.
pub const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Minimum password length, counted in Unicode scalar values.
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Minimum number of digits a phone number must contain.
pub const PHONE_MIN_DIGITS: usize = 10;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+]?[(]?[0-9]{1,4}[)]?[-\s./0-9]*$").expect("valid regex"));

/// A string counts as provided when it is present and non-empty.
pub fn is_provided(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Optional `+`, optional parenthesised prefix, then digits and
/// space/dash/dot/slash separators, with at least [`PHONE_MIN_DIGITS`] digits.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
        && phone.chars().filter(char::is_ascii_digit).count() >= PHONE_MIN_DIGITS
}

/// At least [`PASSWORD_MIN_LENGTH`] characters with an ASCII uppercase
/// letter, an ASCII lowercase letter, an ASCII digit and one of
/// [`PASSWORD_SPECIAL_CHARS`].
///
/// Length counts Unicode scalar values (`char`s), not bytes or UTF-16 code
/// units: an emoji counts once even though it takes two UTF-16 units.
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= PASSWORD_MIN_LENGTH
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c))
}

/// Parse a role priority. Only whole integers inside the role range pass;
/// `"3.5"` and `" 3"` are rejected.
pub fn parse_role(role: &str) -> Option<i16> {
    let priority: i64 = role.parse().ok()?;
    roles::is_valid_priority(priority)
        .then(|| i16::try_from(priority).ok())
        .flatten()
}

pub fn is_valid_role(role: &str) -> bool {
    parse_role(role).is_some()
}
