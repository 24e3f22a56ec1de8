//! Character-class checks - digits, uppercase, lowercase, symbols, whitespace.

use crate::entropy::SYMBOLS;

/// `true` when no digit is present.
pub fn no_numerics(password: &str) -> bool {
    !password.chars().any(|c| c.is_ascii_digit())
}

/// `true` when no ASCII uppercase letter is present.
pub fn no_uppercase(password: &str) -> bool {
    !password.chars().any(|c| c.is_ascii_uppercase())
}

/// `true` when no ASCII lowercase letter is present.
pub fn no_lowercase(password: &str) -> bool {
    !password.chars().any(|c| c.is_ascii_lowercase())
}

/// `true` when none of the fixed symbol set is present.
pub fn no_symbols(password: &str) -> bool {
    !password.chars().any(|c| SYMBOLS.contains(c))
}

/// `true` when any whitespace character is present.
///
/// Whitespace itself is the problem here, not a missing class.
pub fn contains_whitespace(password: &str) -> bool {
    password.chars().any(char::is_whitespace)
}
