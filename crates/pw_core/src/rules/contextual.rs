// Rules parameterised by the session context.
//
// A missing or mismatched fact always fails the rule.

use super::{reversed, Probe};
use crate::context::ContextFact;

/// Rule 8: exactly one case-insensitive, non-overlapping occurrence.
pub fn company_exactly_once(p: &Probe<'_>) -> bool {
    let Some(ContextFact::Company(company)) = p.fact else {
        return false;
    };
    if company.is_empty() {
        return false;
    }
    p.candidate.to_lowercase().matches(&company.to_lowercase()).count() == 1
}

/// Rule 11: case-sensitive.
pub fn captcha_reversed(p: &Probe<'_>) -> bool {
    let Some(ContextFact::Captcha(captcha)) = p.fact else {
        return false;
    };
    p.candidate.contains(&reversed(captcha))
}

/// Rule 13: the emoji verbatim, the name in any case.
pub fn moon_phase(p: &Probe<'_>) -> bool {
    let Some(ContextFact::Moon(moon)) = p.fact else {
        return false;
    };
    p.candidate.contains(&moon.emoji) && contains_ignore_case(p.candidate, &moon.name)
}

/// Rule 14: the name in any case, the hex code verbatim.
pub fn color_name_and_hex(p: &Probe<'_>) -> bool {
    let Some(ContextFact::Color(color)) = p.fact else {
        return false;
    };
    contains_ignore_case(p.candidate, &color.name) && p.candidate.contains(&color.hex)
}

/// Rule 15
pub fn country_without_flag(p: &Probe<'_>) -> bool {
    let Some(ContextFact::Country(country)) = p.fact else {
        return false;
    };
    contains_ignore_case(p.candidate, &country.name) && !p.candidate.contains(&country.flag)
}

/// Rule 19: `GHOST` must appear as `GHOSTTSOHG`, any case.
pub fn secret_word_palindrome(p: &Probe<'_>) -> bool {
    let Some(ContextFact::SecretWord(word)) = p.fact else {
        return false;
    };
    let palindrome = format!("{}{}", word, reversed(word));
    contains_ignore_case(p.candidate, &palindrome)
}

/// Rule 23: exactly two non-overlapping literal occurrences.
pub fn prime_twice(p: &Probe<'_>) -> bool {
    let Some(ContextFact::Prime(prime)) = p.fact else {
        return false;
    };
    p.candidate.matches(&prime.to_string()).count() == 2
}

/// Rule 27: odd-indexed characters lowercased, even-indexed left alone.
pub fn keyword_alternating_case(p: &Probe<'_>) -> bool {
    let Some(ContextFact::Keyword(keyword)) = p.fact else {
        return false;
    };
    p.candidate.contains(&alternate_case(keyword))
}

pub fn alternate_case(word: &str) -> String {
    word.chars()
        .enumerate()
        .flat_map(|(i, c)| {
            let lowered: Vec<char> =
                if i % 2 == 1 { c.to_lowercase().collect() } else { vec![c] };
            lowered
        })
        .collect()
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
