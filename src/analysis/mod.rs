// src/analysis/mod.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::utils::format;

const LOWER_SPACE: u32 = 26;
const UPPER_SPACE: u32 = 26;
const DIGIT_SPACE: u32 = 10;
// Printable ASCII symbols counted towards the search space. Anything that is
// not a lowercase letter, uppercase letter or digit falls in this class.
const SYMBOLS: &str = "!@#$%^&*()-_=+[]{}|;:'\",.<>?/`~";

/// Strength classification assigned to an analyzed password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
    #[serde(rename = "Very Strong")]
    VeryStrong,
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strength::Weak => write!(f, "Weak"),
            Strength::Moderate => write!(f, "Moderate"),
            Strength::Strong => write!(f, "Strong"),
            Strength::VeryStrong => write!(f, "Very Strong"),
        }
    }
}

/// Character classes observed in a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharsetClasses {
    pub lower: bool,
    pub upper: bool,
    pub digit: bool,
    pub symbol: bool,
}

impl CharsetClasses {
    pub fn detect(password: &str) -> Self {
        let mut classes = CharsetClasses::default();
        for ch in password.chars() {
            if ch.is_ascii_lowercase() {
                classes.lower = true;
            } else if ch.is_ascii_uppercase() {
                classes.upper = true;
            } else if ch.is_ascii_digit() {
                classes.digit = true;
            } else {
                classes.symbol = true;
            }
        }
        classes
    }

    /// Total size of the search space spanned by the observed classes.
    pub fn space(&self) -> u32 {
        let mut k = 0;
        if self.lower {
            k += LOWER_SPACE;
        }
        if self.upper {
            k += UPPER_SPACE;
        }
        if self.digit {
            k += DIGIT_SPACE;
        }
        if self.symbol {
            k += SYMBOLS.len() as u32;
        }
        k
    }

    /// Display label, e.g. "lower+digit".
    pub fn label(&self) -> String {
        let mut parts = Vec::new();
        if self.lower {
            parts.push("lower");
        }
        if self.upper {
            parts.push("upper");
        }
        if self.digit {
            parts.push("digit");
        }
        if self.symbol {
            parts.push("symbol");
        }
        parts.join("+")
    }
}

/// Full analysis result for one password.
#[derive(Debug, Clone)]
pub struct PasswordAnalysis {
    pub length: usize,
    pub charset: String,
    pub combinations: String,
    pub entropy: f64,
    pub crack_time: String,
    pub strength: Strength,
    pub feedback: &'static str,
}

/// Classify a password by its entropy in bits.
pub fn classify(entropy: f64) -> (Strength, &'static str) {
    if entropy < 28.0 {
        (Strength::Weak, "Add more characters or include symbols.")
    } else if entropy < 36.0 {
        (Strength::Moderate, "Consider increasing password length.")
    } else if entropy < 60.0 {
        (
            Strength::Strong,
            "Good password — adding more characters improves security.",
        )
    } else {
        (
            Strength::VeryStrong,
            "Great password! Very high resistance to brute-force attacks.",
        )
    }
}

/// Analyze a password against a brute-force attacker guessing at
/// `guesses_per_sec`.
///
/// Entropy is `n * log2(k)` for length `n` over a search space of `k`
/// characters. The combination count `k^n` overflows any integer type for
/// long passwords, so combinations and crack time are carried in log space
/// and only materialized as display strings. Empty input has no search
/// space (`log2(0)` is not a number) and short-circuits to a zeroed Weak
/// result.
pub fn analyze(password: &str, guesses_per_sec: f64) -> PasswordAnalysis {
    if password.is_empty() {
        return PasswordAnalysis {
            length: 0,
            charset: String::new(),
            combinations: "0".to_string(),
            entropy: 0.0,
            crack_time: "—".to_string(),
            strength: Strength::Weak,
            feedback: "Password is empty.",
        };
    }

    let length = password.chars().count();
    let classes = CharsetClasses::detect(password);
    let space = classes.space();

    let entropy = length as f64 * (space as f64).log2();
    let log10_combinations = length as f64 * (space as f64).log10();
    let log10_seconds = log10_combinations - guesses_per_sec.log10();

    let (strength, feedback) = classify(entropy);

    log::debug!(
        "analyzed password: length={}, charset={}, entropy={:.2} bits, strength={}",
        length,
        space,
        entropy,
        strength
    );

    PasswordAnalysis {
        length,
        charset: classes.label(),
        combinations: format::scientific(log10_combinations),
        entropy,
        crack_time: format::crack_time_display(log10_seconds),
        strength,
        feedback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GUESSES_PER_SEC: f64 = 1_000_000_000.0;

    #[test]
    fn symbol_class_has_31_characters() {
        assert_eq!(SYMBOLS.len(), 31);
    }

    #[test]
    fn charset_space_per_class() {
        assert_eq!(CharsetClasses::detect("abc").space(), 26);
        assert_eq!(CharsetClasses::detect("ABC").space(), 26);
        assert_eq!(CharsetClasses::detect("1234").space(), 10);
        assert_eq!(CharsetClasses::detect("abc123").space(), 36);
        assert_eq!(CharsetClasses::detect("Abc1!").space(), 93);
    }

    #[test]
    fn non_ascii_counts_as_symbol() {
        let classes = CharsetClasses::detect("héllo");
        assert!(classes.lower);
        assert!(classes.symbol);
        assert_eq!(classes.space(), 26 + 31);
    }

    #[test]
    fn charset_label_joins_classes() {
        assert_eq!(CharsetClasses::detect("abc123").label(), "lower+digit");
        assert_eq!(
            CharsetClasses::detect("Abc1!").label(),
            "lower+upper+digit+symbol"
        );
    }

    #[test]
    fn classification_boundaries() {
        assert_eq!(classify(27.9).0, Strength::Weak);
        assert_eq!(classify(28.0).0, Strength::Moderate);
        assert_eq!(classify(35.9).0, Strength::Moderate);
        assert_eq!(classify(36.0).0, Strength::Strong);
        assert_eq!(classify(59.9).0, Strength::Strong);
        assert_eq!(classify(60.0).0, Strength::VeryStrong);
    }

    #[test]
    fn analyze_lower_and_digit_password() {
        // 11 chars over a 36-char space: 11 * log2(36) ≈ 56.87 bits
        let analysis = analyze("password123", GUESSES_PER_SEC);
        assert_eq!(analysis.length, 11);
        assert_eq!(analysis.charset, "lower+digit");
        assert!((analysis.entropy - 56.87).abs() < 0.01);
        assert_eq!(analysis.strength, Strength::Strong);
    }

    #[test]
    fn empty_password_yields_zeroed_weak_result() {
        let analysis = analyze("", GUESSES_PER_SEC);
        assert_eq!(analysis.length, 0);
        assert_eq!(analysis.entropy, 0.0);
        assert_eq!(analysis.strength, Strength::Weak);
        assert_eq!(analysis.feedback, "Password is empty.");
        assert_eq!(analysis.combinations, "0");
        assert_eq!(analysis.crack_time, "—");
    }

    #[test]
    fn analyze_short_password_is_weak() {
        let analysis = analyze("abc", GUESSES_PER_SEC);
        assert_eq!(analysis.strength, Strength::Weak);
        assert_eq!(
            analysis.feedback,
            "Add more characters or include symbols."
        );
    }

    #[test]
    fn analyze_mixed_password_is_very_strong() {
        // 11 chars over 93: 11 * log2(93) ≈ 71.9 bits
        let analysis = analyze("Tr0ub4dor&3", GUESSES_PER_SEC);
        assert_eq!(analysis.strength, Strength::VeryStrong);
    }

    #[test]
    fn analyze_long_password_does_not_overflow() {
        let password = "aA1!".repeat(100);
        let analysis = analyze(&password, GUESSES_PER_SEC);
        assert_eq!(analysis.length, 400);
        assert!(analysis.entropy.is_finite());
        assert!(analysis.combinations.contains('e'));
        assert!(analysis.crack_time.ends_with("years"));
    }

    #[test]
    fn strength_serializes_with_spaces() {
        assert_eq!(
            serde_json::to_string(&Strength::VeryStrong).unwrap(),
            "\"Very Strong\""
        );
        assert_eq!(serde_json::to_string(&Strength::Weak).unwrap(), "\"Weak\"");
    }
}
