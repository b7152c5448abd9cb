//! Entropy estimate and brute-force time formatting.

/// Guesses per second assumed for the attacker.
pub const GUESSES_PER_SECOND: f64 = 1e9;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const YEAR: f64 = 31_536_000.0;

/// `length * log2(charset_size)` in bits; zero when the charset is empty.
pub fn estimate_entropy(length: usize, charset_size: u32) -> f64 {
    if charset_size == 0 || length == 0 {
        return 0.0;
    }
    length as f64 * (charset_size as f64).log2()
}

/// Average-case seconds to exhaust half of a `2^entropy` keyspace.
pub fn seconds_to_crack(entropy: f64) -> f64 {
    entropy.exp2() / 2.0 / GUESSES_PER_SECOND
}

/// Formats the crack time in the coarsest unit that keeps the value at least 1.
///
/// A keyspace too large for `f64` is written as `"∞ years"`.
///
/// ```
/// assert_eq!(pwd_suite::time_to_crack(0.0), "0 seconds");
/// ```
pub fn time_to_crack(entropy: f64) -> String {
    let seconds = seconds_to_crack(entropy);

    if seconds < MINUTE {
        return format!("{} seconds", seconds.round());
    }
    if seconds < HOUR {
        return format!("{} minutes", (seconds / MINUTE).round());
    }
    if seconds < DAY {
        return format!("{} hours", (seconds / HOUR).round());
    }
    if seconds < YEAR {
        return format!("{} days", (seconds / DAY).round());
    }

    let years = seconds / YEAR;
    if !years.is_finite() {
        return "∞ years".to_string();
    }
    format!("{} years", years.round())
}
