//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

use crate::checks::{
    contains_whitespace, matches_common_passwords, no_lowercase, no_numerics, no_symbols,
    no_uppercase, repeated_characters, too_short,
};
use crate::entropy::estimate_entropy;
use crate::report::StrengthReport;

/// Minimum acceptable entropy estimate, in bits.
const MIN_ENTROPY_BITS: f64 = 60.0;

/// Evaluates a password against the fixed rule set.
///
/// Pure function of the input and the common-password denylist: no I/O,
/// no mutation, safe to call concurrently. Every check runs regardless of
/// earlier failures so the report always carries all nine flags; the
/// overall verdict is strong only when none of them is set.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A [`StrengthReport`] with one flag per check, in fixed order.
pub fn evaluate_password(password: &SecretString) -> StrengthReport {
    let pwd = password.expose_secret();

    // Flag order matches Check::ALL.
    let flags = [
        too_short(pwd),
        no_numerics(pwd),
        no_uppercase(pwd),
        no_lowercase(pwd),
        no_symbols(pwd),
        contains_whitespace(pwd),
        repeated_characters(pwd),
        matches_common_passwords(pwd),
        estimate_entropy(pwd) < MIN_ENTROPY_BITS,
    ];

    let report = StrengthReport::new(flags);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        failed = report.failed_checks().count(),
        strong = report.is_strong(),
        "password evaluated"
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Check;
    use serial_test::serial;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_evaluate_strong_password() {
        // 10 distinct characters across all four classes: entropy
        // 10 * log2(95) is above 60 bits.
        let report = evaluate_password(&secret("Tr7#mQ9zWx"));
        assert!(report.is_strong());
        assert_eq!(report.failed_checks().count(), 0);
    }

    #[test]
    fn test_evaluate_empty_password() {
        let report = evaluate_password(&secret(""));
        assert!(!report.is_strong());
        assert!(report.flagged(Check::TooShort));
        assert!(report.flagged(Check::NoNumerics));
        assert!(report.flagged(Check::NoUppercase));
        assert!(report.flagged(Check::NoLowercase));
        assert!(report.flagged(Check::NoSymbols));
        // Zero characters means zero repeats.
        assert!(!report.flagged(Check::RepeatedCharacters));
        assert!(!report.flagged(Check::ContainsWhitespace));
        assert!(!report.flagged(Check::MatchesCommonPasswords));
        assert!(report.flagged(Check::LowEntropy));
    }

    #[test]
    #[serial]
    fn test_evaluate_common_password() {
        crate::denylist::reset_denylist_for_testing();
        for pwd in ["password", "PASSWORD", "Password"] {
            let report = evaluate_password(&secret(pwd));
            assert!(
                report.flagged(Check::MatchesCommonPasswords),
                "'{}' should match the denylist",
                pwd
            );
            assert!(!report.is_strong());
        }
    }

    #[test]
    fn test_evaluate_repeated_characters() {
        // All four classes present, but every character appears twice.
        let report = evaluate_password(&secret("Ab1!Ab1!"));
        assert!(report.flagged(Check::RepeatedCharacters));
        assert!(!report.flagged(Check::NoNumerics));
        assert!(!report.flagged(Check::NoUppercase));
        assert!(!report.flagged(Check::NoLowercase));
        assert!(!report.flagged(Check::NoSymbols));
        assert!(!report.is_strong());
    }

    #[test]
    fn test_evaluate_entropy_threshold_is_exact() {
        // Covers every class with 8 distinct characters, yet
        // 8 * log2(95) is about 52.6 bits, short of the 60-bit floor.
        let report = evaluate_password(&secret("Tr7#mQ9z"));
        assert!(report.flagged(Check::LowEntropy));
        assert!(!report.is_strong());
        assert_eq!(
            report.failed_checks().collect::<Vec<_>>(),
            vec![Check::LowEntropy]
        );
    }

    #[test]
    fn test_evaluate_whitespace_always_fails() {
        // Otherwise strong: long, varied, distinct characters.
        let report = evaluate_password(&secret("Tr7#mQ9z Wxe!"));
        assert!(report.flagged(Check::ContainsWhitespace));
        assert!(!report.is_strong());
    }

    #[test]
    fn test_evaluate_too_short() {
        let report = evaluate_password(&secret("Ab1!xyz"));
        assert!(report.flagged(Check::TooShort));
        assert!(!report.is_strong());
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let pwd = secret("Tr7#mQ9zWx");
        let first = evaluate_password(&pwd);
        let second = evaluate_password(&pwd);
        assert_eq!(first, second);
    }

    #[test]
    fn test_strong_iff_no_failed_checks() {
        let samples = [
            "",
            "a",
            "password",
            "Ab1!Ab1!",
            "Tr7#mQ9z",
            "Tr7#mQ9zWx",
            "with space1A!",
            "NoDigitsHere!xyz",
        ];
        for pwd in samples {
            let report = evaluate_password(&secret(pwd));
            assert_eq!(
                report.is_strong(),
                report.failed_checks().count() == 0,
                "verdict/flag mismatch for '{}'",
                pwd
            );
        }
    }

    #[test]
    fn test_report_renders_in_fixed_order() {
        let rendered = evaluate_password(&secret("Tr7#mQ9zWx")).to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Password is strong: Yes");
        assert_eq!(lines[1], "Too short: No");
        assert_eq!(lines[8], "Matches common passwords: No");
        assert_eq!(lines[9], "Low entropy: No");
    }
}
