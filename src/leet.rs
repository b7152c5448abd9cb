//! Leetspeak expansion.
//!
//! Rules are applied in a fixed order. Each rule maps every variant found so
//! far through each of its substitutions and keeps the union, so later rules
//! compose with earlier ones. The variant count grows multiplicatively with
//! the number of mapped letters in the word.

use std::collections::HashSet;

/// Substitution rules, applied in this order.
pub const LEET_RULES: [(char, &[char]); 10] = [
    ('a', &['@', '4']),
    ('e', &['3']),
    ('i', &['1', '!']),
    ('o', &['0']),
    ('s', &['5', '$']),
    ('t', &['7']),
    ('l', &['1']),
    ('g', &['9']),
    ('b', &['6']),
    ('z', &['2']),
];

/// Replaces every occurrence of `letter`, either case, with `replacement`.
fn substitute(word: &str, letter: char, replacement: char) -> String {
    word.chars()
        .map(|c| if c.to_ascii_lowercase() == letter { replacement } else { c })
        .collect()
}

/// Feeds each leetspeak variant of `word` to `visit`, the word itself first,
/// in order of first appearance. Stops as soon as `visit` returns false.
pub fn visit_leet_variants<F>(word: &str, mut visit: F)
where
    F: FnMut(&str) -> bool,
{
    let mut seen: HashSet<String> = HashSet::new();
    seen.insert(word.to_string());
    if !visit(word) {
        return;
    }

    let mut variants = vec![word.to_string()];
    for (letter, replacements) in LEET_RULES.iter() {
        // Only variants from earlier rules are mapped through this one.
        let existing = variants.len();
        for i in 0..existing {
            for replacement in replacements.iter() {
                let variant = substitute(&variants[i], *letter, *replacement);
                if seen.insert(variant.clone()) {
                    if !visit(&variant) {
                        return;
                    }
                    variants.push(variant);
                }
            }
        }
    }
}

/// All leetspeak variants of `word`, the word itself first, in order of first appearance.
pub fn leet_variants(word: &str) -> Vec<String> {
    let mut variants = Vec::new();
    visit_leet_variants(word, |v| {
        variants.push(v.to_string());
        true
    });
    variants
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_mapped_letters() {
        assert_eq!(leet_variants("mur"), vec!["mur"]);
    }

    #[test]
    fn test_last_rule_applies() {
        assert_eq!(leet_variants("xyz"), vec!["xyz", "xy2"]);
    }

    #[test]
    fn test_single_letter() {
        assert_eq!(leet_variants("rex"), vec!["rex", "r3x"]);
    }

    #[test]
    fn test_multiple_substitutions_for_one_letter() {
        assert_eq!(leet_variants("sky"), vec!["sky", "5ky", "$ky"]);
    }

    #[test]
    fn test_rules_compose() {
        let variants = leet_variants("max");
        assert_eq!(variants, vec!["max", "m@x", "m4x"]);

        let variants = leet_variants("bella");
        for expected in ["bella", "b3lla", "6e11@", "63114", "be11a", "6311@"] {
            assert!(variants.contains(&expected.to_string()), "missing {}", expected);
        }
        // a:3 x e:2 x l:2 x b:2 combinations
        assert_eq!(variants.len(), 24);
    }

    #[test]
    fn test_all_occurrences_replaced_ignoring_case() {
        let variants = leet_variants("AnnA");
        assert!(variants.contains(&"@nn@".to_string()));
        assert!(!variants.iter().any(|v| v == "@nnA"));
    }

    #[test]
    fn test_visit_stops_early() {
        let mut visited = Vec::new();
        visit_leet_variants("isolates", |v| {
            visited.push(v.to_string());
            visited.len() < 4
        });

        assert_eq!(visited.len(), 4);
        assert_eq!(visited.as_slice(), &leet_variants("isolates")[..4]);
    }

    #[test]
    fn test_variants_are_unique() {
        let variants = leet_variants("isolates");
        let unique: HashSet<&String> = variants.iter().collect();
        assert_eq!(unique.len(), variants.len());
        assert_eq!(variants[0], "isolates");
    }
}
