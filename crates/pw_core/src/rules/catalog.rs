// The fifty rules, in evaluation order. Data only; logic lives in the
// category modules.

use super::{arithmetic, contextual, counting, knowledge, structural, temporal};
use super::{Probe, Rule};
use crate::context::ContextKey;

pub const RULE_COUNT: usize = 50;

use ContextKey::*;

pub static RULES: [Rule; RULE_COUNT] = [
    Rule::new(1, "Password must be at least 8 characters.", None, counting::min_length),
    Rule::new(2, "Password must include at least TWO numbers.", None, counting::two_digits),
    Rule::new(
        3,
        "Password must include BOTH uppercase and lowercase letters.",
        None,
        counting::mixed_case,
    ),
    Rule::new(
        4,
        "Password must include at least TWO special characters.",
        None,
        counting::two_specials,
    ),
    Rule::new(
        5,
        "The digits in your password must add up to a MULTIPLE of 11.",
        None,
        arithmetic::digit_sum_multiple_of_eleven,
    ),
    Rule::new(
        6,
        "Password must include at least TWO Roman numerals.",
        None,
        counting::two_roman_numerals,
    ),
    Rule::new(
        7,
        "Password must include at least TWO different emojis.",
        None,
        counting::two_distinct_emoji,
    ),
    Rule::new(
        8,
        "Include the company name EXACTLY once.",
        Some(Company),
        contextual::company_exactly_once,
    ),
    Rule::new(9, "Include today's day AND tomorrow's day.", None, temporal::today_and_tomorrow),
    Rule::new(
        10,
        "Roman numerals must represent 9 and 5 together.",
        None,
        structural::nine_and_five,
    ),
    Rule::new(
        11,
        "Captcha must appear REVERSED in the password.",
        Some(Captcha),
        contextual::captcha_reversed,
    ),
    Rule::new(12, "Include TWO different periodic table symbols.", None, knowledge::two_elements),
    Rule::new(13, "Include the moon emoji AND its name.", Some(Moon), contextual::moon_phase),
    Rule::new(
        14,
        "Include the color name AND its HEX code.",
        Some(Color),
        contextual::color_name_and_hex,
    ),
    Rule::new(
        15,
        "Include the country name WITHOUT using its flag.",
        Some(Country),
        contextual::country_without_flag,
    ),
    Rule::new(16, "Include TWO leap years.", None, knowledge::two_years),
    Rule::new(17, "Include exactly THREE strength emojis.", None, knowledge::three_strength_emoji),
    Rule::new(18, "Rickroll link must NOT be clickable.", None, knowledge::unclickable_rickroll),
    Rule::new(
        19,
        "Include the secret word as a palindrome.",
        Some(SecretWord),
        contextual::secret_word_palindrome,
    ),
    Rule::new(20, "Include TWO valid hex color codes.", None, knowledge::two_hex_colors),
    Rule::new(21, "Include TWO different continent names.", None, knowledge::two_continents),
    Rule::new(22, "Include current hour AND minute (2-digit).", None, temporal::hour_and_minute),
    Rule::new(23, "Prime number must appear TWICE.", Some(Prime), contextual::prime_twice),
    Rule::new(24, "Include all FIVE vowels at least once.", None, counting::all_vowels),
    Rule::new(
        25,
        "Gold symbol must appear at the END of password.",
        None,
        structural::ends_with_gold,
    ),
    Rule::new(26, "Include TWO valid chess moves.", None, knowledge::two_chess_moves),
    Rule::new(
        27,
        "Tech keyword must appear in alternating case.",
        Some(Keyword),
        contextual::keyword_alternating_case,
    ),
    Rule::new(28, "Include TWO DIFFERENT YouTube links.", None, knowledge::two_video_links),
    Rule::new(29, "Include infinity symbol EXACTLY twice.", None, knowledge::two_infinities),
    Rule::new(
        30,
        "DONE must appear exactly once and at the center.",
        None,
        structural::marker_centered,
    ),
    Rule::new(
        31,
        "Password length must equal the current level number.",
        None,
        arithmetic::length_equals_level,
    ),
    Rule::new(
        32,
        "Include a math expression that evaluates to 42.",
        None,
        arithmetic::expression_equals_42,
    ),
    Rule::new(
        33,
        "Sum of character codes must be divisible by 7.",
        None,
        arithmetic::code_sum_divisible_by_seven,
    ),
    Rule::new(
        34,
        "First and last characters must be the same.",
        None,
        structural::first_equals_last,
    ),
    Rule::new(
        35,
        "Password must NOT contain vowels outside DONE or I SURVIVED.",
        None,
        structural::no_stray_vowels,
    ),
    Rule::new(36, "Include AM or PM correctly.", None, temporal::meridiem),
    Rule::new(37, "Include a palindrome of length \u{2265} 3.", None, structural::has_palindrome),
    Rule::new(38, "Password must contain at least THREE digits.", None, counting::three_digits),
    Rule::new(39, "Include a valid HTTP status code.", None, knowledge::http_status),
    Rule::new(40, "Final Boss: Remove one previously satisfied rule.", None, rule_was_removed),
    Rule::new(
        41,
        "Password length must be PRIME OR equal to the level.",
        None,
        arithmetic::length_prime_or_level,
    ),
    Rule::new(42, "Uppercase letters must equal digits.", None, counting::uppercase_equals_digits),
    Rule::new(43, "Include a valid IPv4 address.", None, knowledge::ipv4_address),
    Rule::new(
        44,
        "Sum of ALL digits must be AT LEAST the level number.",
        None,
        arithmetic::digit_sum_at_least_level,
    ),
    Rule::new(45, "Include a valid ISO date (YYYY-MM-DD).", None, knowledge::iso_date),
    Rule::new(
        46,
        "Include at least ONE mirrored pair (abba, 1221).",
        None,
        structural::mirrored_block,
    ),
    Rule::new(47, "Include binary representation of 10.", None, structural::binary_ten),
    Rule::new(48, "Exactly HALF of characters must be letters.", None, structural::half_letters),
    Rule::new(
        49,
        "Include a substring whose ASCII sum is exactly 300.",
        None,
        arithmetic::substring_sum_300,
    ),
    Rule::new(50, "FINAL FINAL RULE: Include the text 'I SURVIVED'.", None, structural::survived),
];

/// Rule 40 has no string condition. Only the session's one-time removal
/// action satisfies it.
fn rule_was_removed(p: &Probe<'_>) -> bool {
    p.meta.rule_removed
}

pub fn catalog() -> &'static [Rule] {
    &RULES
}

/// Look up a rule by sequence position.
pub fn rule(id: u32) -> Option<&'static Rule> {
    let index = (id as usize).checked_sub(1)?;
    RULES.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_sequential() {
        for (i, rule) in RULES.iter().enumerate() {
            assert_eq!(rule.id as usize, i + 1, "rule at index {} out of order", i);
            assert!(!rule.description.is_empty());
        }
    }

    #[test]
    fn test_context_rules() {
        let keyed: Vec<(u32, ContextKey)> =
            RULES.iter().filter_map(|r| r.context_key.map(|k| (r.id, k))).collect();
        assert_eq!(
            keyed,
            vec![
                (8, Company),
                (11, Captcha),
                (13, Moon),
                (14, Color),
                (15, Country),
                (19, SecretWord),
                (23, Prime),
                (27, Keyword),
            ]
        );
    }

    #[test]
    fn test_lookup() {
        assert_eq!(rule(1).map(|r| r.id), Some(1));
        assert_eq!(rule(50).map(|r| r.id), Some(50));
        assert!(rule(0).is_none());
        assert!(rule(51).is_none());
    }

    #[test]
    fn test_removed_rule_only_reads_flag() {
        let r = rule(40).expect("rule 40");
        assert!(!r.check(&Probe::new("anything at all")));
        assert!(r.check(&Probe::new("").removed(true)));
    }
}
