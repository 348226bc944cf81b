//! Password strength scoring for the signup meter.

use super::input_len;
use strum::{AsRefStr, Display};

/// Coarse rating shown next to the strength meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display)]
#[strum(serialize_all = "snake_case")]
pub enum StrengthLabel {
    /// Score 0 or 1.
    Weak,
    /// Score 2 or 3.
    Medium,
    /// Score 4.
    Strong,
}

/// Password strength score in `0..=4`.
///
/// Drives the visual meter on the signup form only; acceptance is decided
/// by [`super::validate_signup`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct PasswordStrength(u8);

impl PasswordStrength {
    /// Highest attainable score.
    pub const MAX: u8 = 4;

    /// Scores `password` with four independent checks, one point each:
    /// longer than 5, longer than 9, an uppercase letter, a digit or symbol.
    /// Length is measured in UTF-16 code units.
    #[must_use]
    pub fn of(password: &str) -> Self {
        if password.is_empty() {
            return Self(0);
        }

        let length = input_len(password);
        let checks = [
            length > 5,
            length > 9,
            password.chars().any(|c| c.is_ascii_uppercase()),
            password.chars().any(|c| !c.is_ascii_alphabetic()),
        ];
        let score = checks.iter().filter(|passed| **passed).count();

        Self(u8::try_from(score).unwrap_or(Self::MAX).min(Self::MAX))
    }

    /// Number of checks passed.
    #[must_use]
    pub const fn score(self) -> u8 {
        self.0
    }

    /// Rating for the current score.
    #[must_use]
    pub const fn label(self) -> StrengthLabel {
        match self.0 {
            0 | 1 => StrengthLabel::Weak,
            2 | 3 => StrengthLabel::Medium,
            _ => StrengthLabel::Strong,
        }
    }

    /// Whether meter segment `segment` (1-based) is lit.
    #[must_use]
    pub const fn lights(self, segment: u8) -> bool {
        self.0 >= segment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("", 0 ; "empty")]
    #[test_case("abc", 0 ; "short lowercase")]
    #[test_case("abc1", 1 ; "short with digit")]
    #[test_case("abcdefgh", 1 ; "eight lowercase letters")]
    #[test_case("abcdefgh1", 2 ; "length and digit")]
    #[test_case("Abcdefgh", 2 ; "length and uppercase")]
    #[test_case("abcdefghijk", 2 ; "long lowercase")]
    #[test_case("Abcdef123!", 4 ; "all checks")]
    #[test_case("Abcdefghijk", 3 ; "long with uppercase")]
    #[test_case("ABCDEFGHIJKLMNOP#1", 4 ; "capped at four")]
    #[test_case("pass word", 2 ; "space counts as symbol")]
    #[test_case("😀😀😀", 2 ; "three emoji are six units")]
    #[test_case("😀😀", 1 ; "two emoji are four units")]
    fn test_password_strength(password: &str, expected: u8) {
        assert_eq!(PasswordStrength::of(password).score(), expected);
    }

    #[test]
    fn test_labels() {
        assert_eq!(PasswordStrength::of("abc").label(), StrengthLabel::Weak);
        assert_eq!(PasswordStrength::of("abcdefgh1").label(), StrengthLabel::Medium);
        assert_eq!(PasswordStrength::of("Abcdefghijk").label(), StrengthLabel::Medium);
        assert_eq!(PasswordStrength::of("Abcdef123!").label(), StrengthLabel::Strong);
        assert_eq!(StrengthLabel::Medium.as_ref(), "medium");
    }

    #[test]
    fn test_meter_segments() {
        let strength = PasswordStrength::of("abcdefgh1");
        assert!(strength.lights(1));
        assert!(strength.lights(2));
        assert!(!strength.lights(3));
        assert!(!strength.lights(4));
    }
}
