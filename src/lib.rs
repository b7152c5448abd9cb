//! Password strength analysis and profile wordlist generation
//!
//! This library scores passwords heuristically (character classes, length,
//! weak patterns, entropy and brute-force time) and builds candidate
//! wordlists from personal facts such as a name, a pet or a birth date.
//!
//! # Features
//!
//! - `async` (default): Enables debounced, cancellable evaluation over channels
//! - `tracing`: Enables logging via tracing crate
//! - `serde`: Derives `Serialize`/`Deserialize` on the public records
//!
//! # Environment Variables
//!
//! - `PWD_COMMON_LIST_PATH`: Optional file of extra common passwords, one
//!   per line, read by [`CommonPasswords::from_env`]
//!
//! # Example
//!
//! ```rust
//! use pwd_suite::{analyze_password, generate_wordlist, ProfileField, WordlistInputs};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Tr0ub4dor&3".to_string().into());
//! let analysis = analyze_password(&password).expect("non-empty password");
//! println!("Score: {} ({})", analysis.score, analysis.strength());
//! println!("Time to crack: {}", analysis.time_to_crack);
//!
//! let inputs = WordlistInputs::new()
//!     .with(ProfileField::Name, "Max")
//!     .with(ProfileField::Birthdate, "2020");
//! let wordlist = generate_wordlist(&inputs);
//! assert!(wordlist.contains("Max2020"));
//! ```

// Internal modules
mod common;
mod entropy;
mod evaluator;
mod export;
mod leet;
mod sections;
mod types;
mod wordlist;

// Public API
pub use common::{CommonListError, CommonPasswords, COMMON_LIST_ENV};
pub use entropy::{estimate_entropy, seconds_to_crack, time_to_crack, GUESSES_PER_SECOND};
pub use evaluator::{analyze_password, Analyzer};
pub use export::{export_wordlist, write_wordlist, ExportError, EXPORT_FILE_NAME};
pub use leet::{leet_variants, visit_leet_variants, LEET_RULES};
pub use types::{Characteristics, PasswordAnalysis, PasswordScore, PasswordStrength, PatternMatch};
pub use wordlist::{
    generate_wordlist, ProfileField, Wordlist, WordlistGenerator, WordlistInputs, PREFIXES,
    SUFFIXES,
};

#[cfg(feature = "async")]
pub use evaluator::{analyze_password_tx, DEBOUNCE};

#[cfg(feature = "async")]
pub use wordlist::generate_wordlist_tx;
