//! Pattern sections - detect repeated runs and ascending sequences.

use crate::PatternMatch;
use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

const SEQUENTIAL_DIGITS: [&str; 9] = ["012", "123", "234", "345", "456", "567", "678", "789", "890"];

/// Detects any character repeated 3+ times in a row (e.g. "aaa").
pub fn repeated_characters_section(password: &SecretString) -> SectionResult {
    let chars: Vec<char> = password.expose_secret().chars().collect();
    if chars.len() < 3 {
        return None;
    }

    let mut repeated_count = 1;
    for i in 1..chars.len() {
        if chars[i] == chars[i - 1] {
            repeated_count += 1;
            if repeated_count >= 3 {
                return Some(PatternMatch::RepeatedCharacters);
            }
        } else {
            repeated_count = 1;
        }
    }
    None
}

/// Detects a 3-digit ascending run, "890" included.
pub fn sequential_numbers_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    SEQUENTIAL_DIGITS
        .iter()
        .any(|seq| pwd.contains(seq))
        .then_some(PatternMatch::SequentialNumbers)
}

/// Detects a 3-letter ascending run ("abc" through "xyz"), ignoring case.
pub fn sequential_letters_section(password: &SecretString) -> SectionResult {
    let chars: Vec<char> = password
        .expose_secret()
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .collect();

    let is_sequential = chars.windows(3).any(|w| {
        w.iter().all(|c| c.is_ascii_lowercase())
            && w[1] as u32 == w[0] as u32 + 1
            && w[2] as u32 == w[1] as u32 + 1
    });

    is_sequential.then_some(PatternMatch::SequentialLetters)
}
