//! Password analysis sections
//!
//! Each section inspects one aspect of a password: its character classes,
//! its length, or one weakness pattern.

mod common;
mod length;
mod pattern;
mod variety;

pub use common::common_password_section;
pub use length::length_section;
pub use pattern::{repeated_characters_section, sequential_letters_section, sequential_numbers_section};
pub use variety::{character_variety_section, charset_size};

/// Result type for pattern sections.
/// - `Some(pattern)` - Section found the weakness
/// - `None` - Section passed
pub type SectionResult = Option<crate::PatternMatch>;
