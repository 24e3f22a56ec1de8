//! Approximate-entropy estimation.
//!
//! The estimate assumes a uniform distribution over the detected character
//! pool with every position independent, so it overestimates true entropy
//! for structured or natural-language passwords. It is a coarse heuristic,
//! not an information-theoretic measure.

/// The fixed set of characters recognized as symbols.
pub const SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Estimates password entropy in bits as `length * log2(pool_size)`.
///
/// Pool size sums the alphabet sizes of the character classes actually
/// present in the password: lowercase letters (26), uppercase letters (26),
/// digits (10), the fixed symbol set (33) and whitespace (1). Length is
/// counted in Unicode scalar values. A password containing no recognized
/// character has entropy 0.
pub fn estimate_entropy(password: &str) -> f64 {
    let mut pool_size: u32 = 0;
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        pool_size += 26;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        pool_size += 26;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        pool_size += 10;
    }
    if password.chars().any(|c| SYMBOLS.contains(c)) {
        pool_size += 33;
    }
    // Whitespace is disallowed elsewhere; counted here for completeness.
    if password.chars().any(char::is_whitespace) {
        pool_size += 1;
    }

    if pool_size == 0 {
        return 0.0;
    }
    password.chars().count() as f64 * f64::from(pool_size).log2()
}
