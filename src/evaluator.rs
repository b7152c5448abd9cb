//! Password analyzer - main scoring logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::common::CommonPasswords;
use crate::entropy::{estimate_entropy, time_to_crack};
use crate::sections::{
    character_variety_section, charset_size, common_password_section, length_section,
    repeated_characters_section, sequential_letters_section, sequential_numbers_section,
    SectionResult,
};
use crate::{PasswordAnalysis, PasswordScore};

const MIXED_CASE_BONUS: i64 = 20;
const DIGIT_BONUS: i64 = 15;
const SPECIAL_BONUS: i64 = 15;
const PATTERN_PENALTY: i64 = 10;

/// Delay before a keystroke-triggered analysis runs.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Password analyzer bound to a common password list.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    common: CommonPasswords,
}

impl Analyzer {
    pub fn new(common: CommonPasswords) -> Self {
        Self { common }
    }

    pub fn common_passwords(&self) -> &CommonPasswords {
        &self.common
    }

    /// Analyzes a password.
    ///
    /// # Returns
    /// `None` for an empty password, otherwise the full analysis.
    pub fn analyze(&self, password: &SecretString) -> Option<PasswordAnalysis> {
        if password.expose_secret().is_empty() {
            return None;
        }

        let characteristics = character_variety_section(password);
        let entropy = estimate_entropy(characteristics.length, charset_size(&characteristics));

        // Every section runs; order fixes the report order.
        let sections: [(&str, &dyn Fn(&SecretString) -> SectionResult); 4] = [
            ("common", &|p: &SecretString| common_password_section(p, &self.common)),
            ("repeated", &repeated_characters_section),
            ("sequential numbers", &sequential_numbers_section),
            ("sequential letters", &sequential_letters_section),
        ];

        let mut detected_patterns = Vec::new();
        for (_section_name, section_fn) in sections {
            if let Some(pattern) = section_fn(password) {
                #[cfg(feature = "tracing")]
                tracing::debug!("Pattern section '{}' matched", _section_name);
                detected_patterns.push(pattern);
            }
        }

        let mut score = length_section(password);
        if characteristics.has_lower && characteristics.has_upper {
            score += MIXED_CASE_BONUS;
        }
        if characteristics.has_digit {
            score += DIGIT_BONUS;
        }
        if characteristics.has_special {
            score += SPECIAL_BONUS;
        }
        score -= detected_patterns.len() as i64 * PATTERN_PENALTY;

        Some(PasswordAnalysis {
            score: PasswordScore::new(score),
            entropy_bits: entropy.round() as u32,
            characteristics,
            detected_patterns,
            time_to_crack: time_to_crack(entropy),
        })
    }
}

/// Analyzes a password against the built-in common password list.
///
/// # Returns
/// `None` for an empty password.
pub fn analyze_password(password: &SecretString) -> Option<PasswordAnalysis> {
    Analyzer::default().analyze(password)
}

/// Debounced analysis that sends its result over a channel.
///
/// Waits [`DEBOUNCE`] first; if `token` was cancelled meanwhile (a newer
/// keystroke arrived) nothing is sent.
#[cfg(feature = "async")]
pub async fn analyze_password_tx(
    analyzer: &Analyzer,
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<Option<PasswordAnalysis>>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("analysis is about to start...");

    tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("analysis cancelled before it started");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let analysis = analyzer.analyze(password);

    if let Err(_e) = tx.send(analysis).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password analysis result: {}", _e);
    }
}
