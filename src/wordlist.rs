//! Wordlist generation from personal facts.
//!
//! Every non-blank profile field becomes a seed. Each seed is expanded
//! through case forms, leetspeak variants, suffixes and prefixes, then
//! seeds are concatenated pairwise in both orders.

use std::collections::HashSet;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::leet::visit_leet_variants;

pub const SUFFIXES: [&str; 5] = ["123", "!", "2023", "2024", "01"];
pub const PREFIXES: [&str; 4] = ["my", "the", "i", "love"];

/// Personal facts accepted as seeds, in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ProfileField {
    Name,
    Birthdate,
    Pet,
    Company,
    Hobby,
    Location,
}

impl ProfileField {
    pub const ALL: [ProfileField; 6] = [
        ProfileField::Name,
        ProfileField::Birthdate,
        ProfileField::Pet,
        ProfileField::Company,
        ProfileField::Hobby,
        ProfileField::Location,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::Name => "Name",
            ProfileField::Birthdate => "Birth Date",
            ProfileField::Pet => "Pet Name",
            ProfileField::Company => "Company",
            ProfileField::Hobby => "Hobby",
            ProfileField::Location => "Location",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Free-text value for each [`ProfileField`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WordlistInputs {
    values: [Option<String>; 6],
}

impl WordlistInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`WordlistInputs::set`].
    pub fn with(mut self, field: ProfileField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        self.values[field.index()] = Some(value.into());
    }

    pub fn clear(&mut self, field: ProfileField) {
        self.values[field.index()] = None;
    }

    pub fn get(&self, field: ProfileField) -> Option<&str> {
        self.values[field.index()].as_deref()
    }

    /// Raw values of the non-blank fields, in field order.
    pub fn seeds(&self) -> Vec<&str> {
        ProfileField::ALL
            .iter()
            .filter_map(|field| self.get(*field))
            .filter(|value| !trim_seed(value).is_empty())
            .collect()
    }
}

/// Trims whitespace and byte order marks from both ends.
fn trim_seed(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Deduplicated candidate passwords in order of first generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Wordlist {
    words: Vec<String>,
}

impl Wordlist {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    pub fn into_vec(self) -> Vec<String> {
        self.words
    }

    /// One candidate per line, no trailing newline.
    pub fn to_text(&self) -> String {
        self.words.join("\n")
    }
}

impl<'a> IntoIterator for &'a Wordlist {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// Order-preserving accumulator that drops duplicates and empty strings,
/// and stops accepting words once `limit` is reached.
#[derive(Default)]
struct Collector {
    seen: HashSet<String>,
    words: Vec<String>,
    limit: Option<usize>,
}

impl Collector {
    fn with_limit(limit: Option<usize>) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    fn is_full(&self) -> bool {
        self.limit.is_some_and(|limit| self.words.len() >= limit)
    }

    /// Returns false once the collector is full.
    fn push(&mut self, word: String) -> bool {
        if self.is_full() {
            return false;
        }
        if !word.is_empty() && self.seen.insert(word.clone()) {
            self.words.push(word);
        }
        !self.is_full()
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Pushes the case, leetspeak, suffix and prefix forms of one seed.
fn push_seed_candidates(collector: &mut Collector, seed: &str) {
    let lower = trim_seed(seed).to_lowercase();
    let capitalized = capitalize(&lower);

    for word in [lower.clone(), lower.to_uppercase(), capitalized.clone()] {
        if !collector.push(word) {
            return;
        }
    }

    visit_leet_variants(&lower, |variant| collector.push(variant.to_string()));
    if collector.is_full() {
        return;
    }

    for suffix in SUFFIXES {
        if !collector.push(format!("{lower}{suffix}"))
            || !collector.push(format!("{capitalized}{suffix}"))
        {
            return;
        }
    }
    for prefix in PREFIXES {
        if !collector.push(format!("{prefix}{lower}"))
            || !collector.push(format!("{prefix}{capitalized}"))
        {
            return;
        }
    }
}

/// Wordlist generator with an optional size cap.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordlistGenerator {
    limit: Option<usize>,
}

impl WordlistGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps only the first `limit` candidates; generation stops once they are collected.
    pub fn with_limit(limit: usize) -> Self {
        Self { limit: Some(limit) }
    }

    pub fn generate(&self, inputs: &WordlistInputs) -> Wordlist {
        self.generate_until(inputs, || false).unwrap_or_default()
    }

    /// Generates unless `cancelled` returns true between seeds, in which case `None`.
    pub fn generate_until<F>(&self, inputs: &WordlistInputs, cancelled: F) -> Option<Wordlist>
    where
        F: Fn() -> bool,
    {
        let seeds = inputs.seeds();
        let mut collector = Collector::with_limit(self.limit);

        for seed in &seeds {
            collector.push(seed.to_string());
        }

        for seed in &seeds {
            if cancelled() {
                return None;
            }
            if collector.is_full() {
                break;
            }
            push_seed_candidates(&mut collector, seed);
        }

        if seeds.len() > 1 {
            'pairs: for (i, first) in seeds.iter().enumerate() {
                for second in &seeds[i + 1..] {
                    if !collector.push(format!("{first}{second}"))
                        || !collector.push(format!("{second}{first}"))
                    {
                        break 'pairs;
                    }
                }
            }
        }

        let words = collector.words;

        #[cfg(feature = "tracing")]
        tracing::debug!("Generated {} candidates from {} seeds", words.len(), seeds.len());

        Some(Wordlist { words })
    }
}

/// Generates the full, uncapped wordlist for `inputs`.
pub fn generate_wordlist(inputs: &WordlistInputs) -> Wordlist {
    WordlistGenerator::new().generate(inputs)
}

/// Cancellable generation that sends its result over a channel.
///
/// Generation runs on the blocking pool and checks `token` between seeds;
/// nothing is sent once cancelled.
#[cfg(feature = "async")]
pub async fn generate_wordlist_tx(
    generator: WordlistGenerator,
    inputs: WordlistInputs,
    token: CancellationToken,
    tx: mpsc::Sender<Wordlist>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("wordlist generation is about to start...");

    let watch = token.clone();
    let result =
        tokio::task::spawn_blocking(move || generator.generate_until(&inputs, || watch.is_cancelled()))
            .await;

    let wordlist = match result {
        Ok(Some(wordlist)) if !token.is_cancelled() => wordlist,
        Ok(_) => {
            #[cfg(feature = "tracing")]
            tracing::debug!("wordlist generation cancelled");
            return;
        }
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::error!("Wordlist generation task failed: {}", _e);
            return;
        }
    };

    if let Err(_e) = tx.send(wordlist).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send wordlist: {}", _e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    #[tokio::test]
    async fn test_generate_wordlist_tx_sends_result() {
        let (tx, mut rx) = mpsc::channel(1);
        let inputs = WordlistInputs::new().with(ProfileField::Name, "Max");

        generate_wordlist_tx(WordlistGenerator::new(), inputs.clone(), CancellationToken::new(), tx)
            .await;

        let wordlist = rx.recv().await.expect("Should receive wordlist");
        assert_eq!(wordlist, generate_wordlist(&inputs));
    }

    #[tokio::test]
    async fn test_generate_wordlist_tx_cancelled() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();
        let inputs = WordlistInputs::new().with(ProfileField::Name, "Max");

        generate_wordlist_tx(WordlistGenerator::new(), inputs, token, tx).await;

        assert!(rx.recv().await.is_none());
    }
}
