//! Length check - flags passwords below the minimum length.

const MIN_LENGTH: usize = 8;

/// `true` when the password has fewer than 8 characters.
///
/// Length is counted in Unicode scalar values, not bytes.
pub fn too_short(password: &str) -> bool {
    password.chars().count() < MIN_LENGTH
}
