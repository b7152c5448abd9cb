//! Length section - awards points for password length.

use secrecy::{ExposeSecret, SecretString};

const MIN_LENGTH: usize = 8;
const LONG_LENGTH: usize = 12;
const LENGTH_BONUS: i64 = 25;

/// Returns the length bonus: 25 points at 8 characters, another 25 at 12.
pub fn length_section(password: &SecretString) -> i64 {
    let len = password.expose_secret().chars().count();
    let mut bonus = 0;
    if len >= MIN_LENGTH {
        bonus += LENGTH_BONUS;
    }
    if len >= LONG_LENGTH {
        bonus += LENGTH_BONUS;
    }
    bonus
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_length_section_too_short() {
        assert_eq!(length_section(&secret("Short1!")), 0);
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        assert_eq!(length_section(&secret("12345678")), 25);
    }

    #[test]
    fn test_length_section_long() {
        assert_eq!(length_section(&secret("LongEnough12")), 50);
        assert_eq!(length_section(&secret("LongEnough123!@#$")), 50);
    }

    #[test]
    fn test_length_section_counts_characters() {
        // 8 characters, 16 bytes
        assert_eq!(length_section(&secret("éééééééé")), 25);
    }
}
