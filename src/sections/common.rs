//! Common password section - checks for well-known password substrings.

use crate::common::CommonPasswords;
use crate::PatternMatch;
use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Checks if the password contains any entry of the common password list.
///
/// # Returns
/// - `Some(PatternMatch::CommonPassword)` if an entry occurs anywhere, ignoring case
/// - `None` otherwise
pub fn common_password_section(password: &SecretString, list: &CommonPasswords) -> SectionResult {
    list.matches(password.expose_secret())
        .then_some(PatternMatch::CommonPassword)
}
