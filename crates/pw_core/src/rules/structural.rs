// Positional and shape rules. Indices are char indices.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{char_len, Probe};

const MARKER: &str = "DONE";

static WHITELISTED_PHRASES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)DONE|I SURVIVED").expect("whitelist pattern"));

/// Rule 10
pub fn nine_and_five(p: &Probe<'_>) -> bool {
    p.candidate.contains("IX") && p.candidate.contains('V')
}

/// Rule 25
pub fn ends_with_gold(p: &Probe<'_>) -> bool {
    p.candidate.ends_with("Au")
}

/// Rule 30: `DONE` once, starting at `floor((len - 4) / 2)`.
pub fn marker_centered(p: &Probe<'_>) -> bool {
    let s = p.candidate;
    if s.matches(MARKER).count() != 1 {
        return false;
    }
    let Some(byte_index) = s.find(MARKER) else {
        return false;
    };
    let start = s[..byte_index].chars().count() as i64;
    let len = char_len(s) as i64;
    start == (len - MARKER.len() as i64).div_euclid(2)
}

/// Rule 34
pub fn first_equals_last(p: &Probe<'_>) -> bool {
    let mut chars = p.candidate.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) => first == last,
        _ => false,
    }
}

/// Rule 35: vowels are only allowed inside `DONE` and `I SURVIVED`.
pub fn no_stray_vowels(p: &Probe<'_>) -> bool {
    let stripped = WHITELISTED_PHRASES_RE.replace_all(p.candidate, "");
    !stripped.chars().any(|c| "aeiouAEIOU".contains(c))
}

/// Rule 37: a palindromic run of at least three characters.
pub fn has_palindrome(p: &Probe<'_>) -> bool {
    let chars: Vec<char> = p.candidate.chars().collect();
    let n = chars.len();
    for center in 0..n {
        // odd: chars[center - 1] == chars[center + 1]
        if center >= 1 && center + 1 < n && chars[center - 1] == chars[center + 1] {
            return true;
        }
        // even: a length-4 palindrome needs the inner pair equal first
        if center + 1 < n && chars[center] == chars[center + 1] {
            let (mut left, mut right) = (center, center + 1);
            while left > 0 && right + 1 < n && chars[left - 1] == chars[right + 1] {
                left -= 1;
                right += 1;
                if right - left + 1 >= 3 {
                    return true;
                }
            }
        }
    }
    false
}

/// Rule 46: `abba`-shaped block anywhere.
pub fn mirrored_block(p: &Probe<'_>) -> bool {
    let chars: Vec<char> = p.candidate.chars().collect();
    chars.windows(4).any(|w| w[0] == w[3] && w[1] == w[2])
}

/// Rule 47
pub fn binary_ten(p: &Probe<'_>) -> bool {
    p.candidate.contains("1010")
}

/// Rule 48: even length, exactly half ASCII letters.
pub fn half_letters(p: &Probe<'_>) -> bool {
    let len = char_len(p.candidate);
    let letters = p.candidate.chars().filter(|c| c.is_ascii_alphabetic()).count();
    len % 2 == 0 && letters * 2 == len
}

/// Rule 50
pub fn survived(p: &Probe<'_>) -> bool {
    p.candidate.contains("I SURVIVED")
}
