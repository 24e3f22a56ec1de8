//! Fixed-rule password strength checking.
//!
//! Evaluates a password against nine fixed rules — minimum length,
//! character-class coverage, whitespace, repeated characters, a bundled
//! common-password denylist and an approximate-entropy threshold — and
//! reports which rules failed.
//!
//! All lengths and repeat counts are measured in Unicode scalar values
//! (`char`), not bytes.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_EXTRA_DENYLIST_PATH`: Optional file of extra denylist entries,
//!   merged once at startup via [`extend_denylist_from_env`]
//!
//! # Example
//!
//! ```rust
//! use pwd_check::{evaluate_password, Check};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Tr7#mQ9zWx".to_string().into());
//! let report = evaluate_password(&password);
//!
//! assert!(report.is_strong());
//! assert!(!report.flagged(Check::LowEntropy));
//!
//! // Render every entry as "<check>: Yes|No" in fixed order.
//! println!("{}", report);
//! ```

// Internal modules
mod checks;
mod denylist;
mod entropy;
mod evaluator;
mod report;

// Public API
pub use denylist::{
    DenylistError, denylist_len, extend_denylist_from_env, extend_denylist_from_path, is_common,
};
pub use entropy::{SYMBOLS, estimate_entropy};
pub use evaluator::evaluate_password;
pub use report::{Check, STRONG_LABEL, StrengthReport};
