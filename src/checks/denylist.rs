//! Denylist check - flags passwords found in the common-password list.

use crate::denylist::is_common;

/// `true` when the lowercased password exactly matches a denylist entry.
pub fn matches_common_passwords(password: &str) -> bool {
    is_common(password)
}
