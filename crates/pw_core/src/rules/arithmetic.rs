// Sums, lengths and the single binary expression rule.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{char_len, digit_sum, Probe};

static EXPRESSION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+)([+\-*/×÷−])([0-9]+)").expect("expression pattern"));

const EXPRESSION_TARGET: i128 = 42;
const SUBSTRING_TARGET: u64 = 300;

/// Rule 5: needs at least one digit.
pub fn digit_sum_multiple_of_eleven(p: &Probe<'_>) -> bool {
    digit_sum(p.candidate).is_some_and(|sum| sum % 11 == 0)
}

/// Rule 31
pub fn length_equals_level(p: &Probe<'_>) -> bool {
    char_len(p.candidate) == p.meta.level as usize
}

/// Rule 32: only the first `digits op digits` match counts.
pub fn expression_equals_42(p: &Probe<'_>) -> bool {
    let Some(caps) = EXPRESSION_RE.captures(p.candidate) else {
        return false;
    };
    let (Ok(a), Ok(b)) = (caps[1].parse::<u64>(), caps[3].parse::<u64>()) else {
        return false;
    };
    apply_operator(i128::from(a), &caps[2], i128::from(b)) == Some(EXPRESSION_TARGET)
}

/// Exact integer evaluation. Division only counts when it is exact, so
/// `85/2` is not 42. Division by zero and overflow give `None`.
fn apply_operator(a: i128, op: &str, b: i128) -> Option<i128> {
    match op {
        "+" => a.checked_add(b),
        "-" | "−" => a.checked_sub(b),
        "*" | "×" => a.checked_mul(b),
        "/" | "÷" => {
            if b == 0 || a % b != 0 {
                None
            } else {
                Some(a / b)
            }
        }
        _ => None,
    }
}

/// Rule 33: sum of Unicode scalar values.
pub fn code_sum_divisible_by_seven(p: &Probe<'_>) -> bool {
    p.candidate.chars().map(|c| u64::from(c as u32)).sum::<u64>() % 7 == 0
}

/// Rule 41: length < 2 is never prime.
pub fn length_prime_or_level(p: &Probe<'_>) -> bool {
    let len = char_len(p.candidate);
    len == p.meta.level as usize || is_prime(len)
}

/// Rule 44: needs at least one digit.
pub fn digit_sum_at_least_level(p: &Probe<'_>) -> bool {
    digit_sum(p.candidate).is_some_and(|sum| sum >= u64::from(p.meta.level))
}

/// Rule 49: some run of consecutive characters sums to exactly 300.
///
/// Each start position extends until the running sum reaches 300; anything
/// above that ends the inner scan early.
pub fn substring_sum_300(p: &Probe<'_>) -> bool {
    let codes: Vec<u64> = p.candidate.chars().map(|c| u64::from(c as u32)).collect();
    for start in 0..codes.len() {
        let mut sum = 0;
        for &code in &codes[start..] {
            sum += code;
            if sum >= SUBSTRING_TARGET {
                if sum == SUBSTRING_TARGET {
                    return true;
                }
                break;
            }
        }
    }
    false
}

pub(crate) fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    let mut i = 2;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}
