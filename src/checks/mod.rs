//! Individual strength checks.
//!
//! Each check inspects one aspect of the password and returns `true` when
//! the problem it looks for is present.

mod denylist;
mod length;
mod repeats;
mod variety;

pub use denylist::matches_common_passwords;
pub use length::too_short;
pub use repeats::repeated_characters;
pub use variety::{contains_whitespace, no_lowercase, no_numerics, no_symbols, no_uppercase};
