// Character-class tallies.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use super::{char_len, digit_count, Probe};

/// Code points the game treats as emoji: ©, ®, the U+2000–U+3300 symbol
/// blocks and the supplementary pictograph planes U+1F000–U+1FBFF.
static EMOJI_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\x{00A9}\x{00AE}\x{2000}-\x{3300}\x{1F000}-\x{1FBFF}]").expect("emoji pattern")
});

/// Rule 1
pub fn min_length(p: &Probe<'_>) -> bool {
    char_len(p.candidate) >= 8
}

/// Rule 2
pub fn two_digits(p: &Probe<'_>) -> bool {
    digit_count(p.candidate) >= 2
}

/// Rule 3
pub fn mixed_case(p: &Probe<'_>) -> bool {
    let s = p.candidate;
    s.chars().any(|c| c.is_ascii_uppercase()) && s.chars().any(|c| c.is_ascii_lowercase())
}

/// Rule 4: anything outside `[A-Za-z0-9]`, emoji and spaces included.
pub fn two_specials(p: &Probe<'_>) -> bool {
    p.candidate.chars().filter(|c| !c.is_ascii_alphanumeric()).count() >= 2
}

/// Rule 6
pub fn two_roman_numerals(p: &Probe<'_>) -> bool {
    p.candidate.chars().filter(|c| "IVXLCDM".contains(*c)).count() >= 2
}

/// Rule 7: distinct code points, not occurrences.
pub fn two_distinct_emoji(p: &Probe<'_>) -> bool {
    let distinct: HashSet<&str> = EMOJI_RE.find_iter(p.candidate).map(|m| m.as_str()).collect();
    distinct.len() >= 2
}

/// Rule 24
pub fn all_vowels(p: &Probe<'_>) -> bool {
    let lower = p.candidate.to_ascii_lowercase();
    ['a', 'e', 'i', 'o', 'u'].iter().all(|v| lower.contains(*v))
}

/// Rule 38
pub fn three_digits(p: &Probe<'_>) -> bool {
    digit_count(p.candidate) >= 3
}

/// Rule 42
pub fn uppercase_equals_digits(p: &Probe<'_>) -> bool {
    let upper = p.candidate.chars().filter(|c| c.is_ascii_uppercase()).count();
    upper == digit_count(p.candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(f: fn(&Probe<'_>) -> bool, s: &str) -> bool {
        f(&Probe::new(s))
    }

    #[test]
    fn test_min_length_counts_chars() {
        assert!(ok(min_length, "AAAAAAAA"));
        assert!(!ok(min_length, "AAAAAAA"));
        // Seven emoji are 28 bytes but only seven characters.
        assert!(!ok(min_length, &"\u{1F600}".repeat(7)));
    }

    #[test]
    fn test_digits() {
        assert!(!ok(two_digits, "AAAAAAAA"));
        assert!(ok(two_digits, "a1b2"));
        assert!(!ok(three_digits, "a1b2"));
        assert!(ok(three_digits, "123"));
    }

    #[test]
    fn test_mixed_case() {
        assert!(ok(mixed_case, "Ab"));
        assert!(!ok(mixed_case, "AB12"));
        assert!(!ok(mixed_case, "ab12"));
    }

    #[test]
    fn test_specials() {
        assert!(ok(two_specials, "!@"));
        assert!(ok(two_specials, "a b c"));
        assert!(!ok(two_specials, "abc123!"));
    }

    #[test]
    fn test_roman_numerals() {
        assert!(ok(two_roman_numerals, "IVIV"));
        assert!(ok(two_roman_numerals, "xCxM"));
        assert!(!ok(two_roman_numerals, "ivxlcdm"));
    }

    #[test]
    fn test_distinct_emoji() {
        assert!(ok(two_distinct_emoji, "\u{1F600}\u{1F525}"));
        assert!(!ok(two_distinct_emoji, "\u{1F600}\u{1F600}\u{1F600}"));
        assert!(ok(two_distinct_emoji, "\u{00A9}\u{221E}"));
        assert!(!ok(two_distinct_emoji, "plain text"));
    }

    #[test]
    fn test_all_vowels() {
        assert!(ok(all_vowels, "AEIOU"));
        assert!(ok(all_vowels, "education"));
        assert!(!ok(all_vowels, "aeio"));
    }

    #[test]
    fn test_uppercase_equals_digits() {
        assert!(ok(uppercase_equals_digits, "AB12"));
        assert!(ok(uppercase_equals_digits, ""));
        assert!(!ok(uppercase_equals_digits, "ABC12"));
    }
}
