//! Strength report types.

use std::fmt;

/// Label for the overall verdict entry, always first in the report.
pub const STRONG_LABEL: &str = "Password is strong";

/// The fixed set of failure checks, in report order.
///
/// Discriminant order is the display order consumers see; it must not be
/// reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Check {
    TooShort,
    NoNumerics,
    NoUppercase,
    NoLowercase,
    NoSymbols,
    ContainsWhitespace,
    RepeatedCharacters,
    MatchesCommonPasswords,
    LowEntropy,
}

impl Check {
    /// Every check, in report order.
    pub const ALL: [Check; 9] = [
        Check::TooShort,
        Check::NoNumerics,
        Check::NoUppercase,
        Check::NoLowercase,
        Check::NoSymbols,
        Check::ContainsWhitespace,
        Check::RepeatedCharacters,
        Check::MatchesCommonPasswords,
        Check::LowEntropy,
    ];

    /// The name this check carries in report output.
    pub const fn label(self) -> &'static str {
        match self {
            Check::TooShort => "Too short",
            Check::NoNumerics => "No numerics",
            Check::NoUppercase => "No uppercase letters",
            Check::NoLowercase => "No lowercase letters",
            Check::NoSymbols => "No symbols",
            Check::ContainsWhitespace => "Contains whitespace",
            Check::RepeatedCharacters => "Repeated characters",
            Check::MatchesCommonPasswords => "Matches common passwords",
            Check::LowEntropy => "Low entropy",
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of evaluating a password against the fixed rule set.
///
/// Each check flag is `true` when the problem it names is present.
/// The password is strong only when no check flagged anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    flags: [bool; 9],
}

impl StrengthReport {
    pub(crate) fn new(flags: [bool; 9]) -> Self {
        Self { flags }
    }

    /// `true` when no check flagged a problem.
    pub fn is_strong(&self) -> bool {
        !self.flags.iter().any(|&f| f)
    }

    /// Whether the given check flagged a problem.
    pub fn flagged(&self, check: Check) -> bool {
        self.flags[check as usize]
    }

    /// The checks that flagged a problem, in report order.
    pub fn failed_checks(&self) -> impl Iterator<Item = Check> + '_ {
        Check::ALL.into_iter().filter(|&c| self.flagged(c))
    }

    /// All report entries in fixed order: the overall verdict first,
    /// then every check with its flag.
    pub fn entries(&self) -> Vec<(&'static str, bool)> {
        let mut entries = Vec::with_capacity(10);
        entries.push((STRONG_LABEL, self.is_strong()));
        for check in Check::ALL {
            entries.push((check.label(), self.flagged(check)));
        }
        entries
    }
}

impl fmt::Display for StrengthReport {
    /// Renders each entry as `<name>: Yes` or `<name>: No`, one per line,
    /// in the fixed report order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.entries().into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", name, if value { "Yes" } else { "No" })?;
        }
        Ok(())
    }
}
