//! Repeated-character check.

use std::collections::HashSet;

/// `true` when any character occurs more than once.
///
/// Even two identical characters anywhere in the password trip this
/// check. The rule deliberately favors high-entropy random strings over
/// memorable passphrases.
pub fn repeated_characters(password: &str) -> bool {
    let distinct: HashSet<char> = password.chars().collect();
    distinct.len() < password.chars().count()
}
