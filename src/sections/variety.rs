//! Character variety section - detects lowercase, uppercase, digit and special characters.

use crate::Characteristics;
use secrecy::{ExposeSecret, SecretString};

const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

const LOWER_SIZE: u32 = 26;
const UPPER_SIZE: u32 = 26;
const DIGIT_SIZE: u32 = 10;
const SPECIAL_SIZE: u32 = 32;

/// Classifies the characters of the password.
///
/// Only ASCII letters and digits count, and only the fixed special set
/// `! @ # $ % ^ & * ( ) , . ? " : { } | < >` counts as special.
pub fn character_variety_section(password: &SecretString) -> Characteristics {
    let pwd = password.expose_secret();
    Characteristics {
        length: pwd.chars().count(),
        has_lower: pwd.chars().any(|c| c.is_ascii_lowercase()),
        has_upper: pwd.chars().any(|c| c.is_ascii_uppercase()),
        has_digit: pwd.chars().any(|c| c.is_ascii_digit()),
        has_special: pwd.chars().any(|c| SPECIAL_CHARS.contains(c)),
    }
}

/// Sum of the class sizes present. Zero when no class matched.
pub fn charset_size(characteristics: &Characteristics) -> u32 {
    [
        (characteristics.has_lower, LOWER_SIZE),
        (characteristics.has_upper, UPPER_SIZE),
        (characteristics.has_digit, DIGIT_SIZE),
        (characteristics.has_special, SPECIAL_SIZE),
    ]
    .iter()
    .filter(|(present, _)| *present)
    .map(|(_, size)| size)
    .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_variety_lowercase_only() {
        let c = character_variety_section(&secret("lowercase"));
        assert!(c.has_lower);
        assert!(!c.has_upper && !c.has_digit && !c.has_special);
        assert_eq!(charset_size(&c), 26);
    }

    #[test]
    fn test_variety_all_categories() {
        let c = character_variety_section(&secret("Tr0ub4dor&3"));
        assert_eq!(c.length, 11);
        assert!(c.has_lower && c.has_upper && c.has_digit && c.has_special);
        assert_eq!(charset_size(&c), 94);
    }

    #[test]
    fn test_variety_symbol_outside_special_set() {
        let c = character_variety_section(&secret("~~~"));
        assert!(!c.has_special);
        assert_eq!(charset_size(&c), 0);
    }

    #[test]
    fn test_variety_non_ascii_letters_do_not_count() {
        let c = character_variety_section(&secret("ÄÖü"));
        assert!(!c.has_lower && !c.has_upper);
        assert_eq!(c.length, 3);
    }
}
