//! Records produced by the password analyzer.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Password score, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PasswordScore(u8);

impl PasswordScore {
    pub const MAX: i64 = 100;

    /// Builds a score from a raw additive/subtractive total, clamping it to `0..=100`.
    pub fn new(raw: i64) -> Self {
        Self(raw.clamp(0, Self::MAX) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Strength bucket for this score.
    pub fn strength(&self) -> PasswordStrength {
        PasswordStrength::from_score(*self)
    }
}

impl fmt::Display for PasswordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strength label derived from a [`PasswordScore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PasswordStrength {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl PasswordStrength {
    /// Maps a score to its bucket, most severe threshold first.
    pub fn from_score(score: PasswordScore) -> Self {
        match score.value() {
            80.. => PasswordStrength::VeryStrong,
            60.. => PasswordStrength::Strong,
            40.. => PasswordStrength::Moderate,
            20.. => PasswordStrength::Weak,
            _ => PasswordStrength::VeryWeak,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::VeryWeak => "Very Weak",
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Moderate => "Moderate",
            PasswordStrength::Strong => "Strong",
            PasswordStrength::VeryStrong => "Very Strong",
        }
    }

    /// Presentation color tag. Carries no meaning for the analyzer itself.
    pub fn color(&self) -> &'static str {
        match self {
            PasswordStrength::VeryWeak => "danger",
            PasswordStrength::Weak | PasswordStrength::Moderate => "warning",
            PasswordStrength::Strong => "primary",
            PasswordStrength::VeryStrong => "success",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Character classes found in a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Characteristics {
    pub length: usize,
    pub has_lower: bool,
    pub has_upper: bool,
    pub has_digit: bool,
    pub has_special: bool,
}

/// Weakness category found by the pattern checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PatternMatch {
    CommonPassword,
    RepeatedCharacters,
    SequentialNumbers,
    SequentialLetters,
}

impl PatternMatch {
    pub fn name(&self) -> &'static str {
        match self {
            PatternMatch::CommonPassword => "Common passwords",
            PatternMatch::RepeatedCharacters => "Repeated characters",
            PatternMatch::SequentialNumbers => "Sequential numbers",
            PatternMatch::SequentialLetters => "Sequential letters",
        }
    }
}

impl fmt::Display for PatternMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Full result of analyzing one password.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PasswordAnalysis {
    pub score: PasswordScore,
    pub entropy_bits: u32,
    pub characteristics: Characteristics,
    /// In check order, not match position.
    pub detected_patterns: Vec<PatternMatch>,
    pub time_to_crack: String,
}

impl PasswordAnalysis {
    pub fn strength(&self) -> PasswordStrength {
        self.score.strength()
    }
}
