//! Rule catalog
//!
//! Every rule is plain data plus a function pointer. Predicates are pure:
//! they read a [`Probe`] and answer yes or no. They never panic and never
//! mutate anything, whatever string they are handed.
//!
//! Predicates are grouped by what they look at:
//! - [`counting`]: character-class tallies
//! - [`arithmetic`]: digit sums, code-point sums, lengths, the `= 42` rule
//! - [`contextual`]: rules parameterised by the session context
//! - [`temporal`]: rules reading the local clock
//! - [`structural`]: positional and shape rules
//! - [`knowledge`]: trivia patterns (elements, IPs, dates, links, glyphs)
//!
//! Character-level rules work on Unicode scalar values (`char`). Where a
//! rule sums "character codes" it sums `char as u32`.

pub mod arithmetic;
pub mod catalog;
pub mod contextual;
pub mod counting;
pub mod knowledge;
pub mod structural;
pub mod temporal;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::context::{ContextFact, ContextKey};

pub use catalog::{catalog, rule, RULES, RULE_COUNT};

/// Signature shared by every rule predicate.
pub type Predicate = fn(&Probe<'_>) -> bool;

/// Per-rule metadata supplied by the evaluator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationMetadata {
    /// Sequence position of the rule being checked.
    pub level: u32,
    /// Set once the player used the one-time "remove a rule" action.
    pub rule_removed: bool,
}

/// Everything a predicate may read.
#[derive(Debug, Clone, Copy)]
pub struct Probe<'a> {
    pub candidate: &'a str,
    pub fact: Option<ContextFact<'a>>,
    pub meta: EvaluationMetadata,
    pub now: NaiveDateTime,
}

impl<'a> Probe<'a> {
    /// A probe with no context fact, zeroed metadata and the Unix epoch as
    /// the clock reading.
    pub fn new(candidate: &'a str) -> Self {
        Self {
            candidate,
            fact: None,
            meta: EvaluationMetadata::default(),
            now: NaiveDateTime::default(),
        }
    }

    pub fn with_fact(mut self, fact: ContextFact<'a>) -> Self {
        self.fact = Some(fact);
        self
    }

    pub fn at(mut self, now: NaiveDateTime) -> Self {
        self.now = now;
        self
    }

    pub fn level(mut self, level: u32) -> Self {
        self.meta.level = level;
        self
    }

    pub fn removed(mut self, rule_removed: bool) -> Self {
        self.meta.rule_removed = rule_removed;
        self
    }
}

/// One entry in the catalog.
#[derive(Clone, Copy)]
pub struct Rule {
    pub id: u32,
    pub description: &'static str,
    pub context_key: Option<ContextKey>,
    pub predicate: Predicate,
}

impl Rule {
    pub const fn new(
        id: u32,
        description: &'static str,
        context_key: Option<ContextKey>,
        predicate: Predicate,
    ) -> Self {
        Self { id, description, context_key, predicate }
    }

    pub fn check(&self, probe: &Probe<'_>) -> bool {
        (self.predicate)(probe)
    }

    pub fn info(&self) -> RuleInfo {
        RuleInfo { id: self.id, description: self.description, context_key: self.context_key }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("description", &self.description)
            .field("context_key", &self.context_key)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Rule {}

/// Serializable view of a rule (no predicate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleInfo {
    pub id: u32,
    pub description: &'static str,
    pub context_key: Option<ContextKey>,
}

// ========================
// Shared character helpers
// ========================

pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

pub(crate) fn digit_values(s: &str) -> impl Iterator<Item = u32> + '_ {
    s.chars().filter_map(|c| if c.is_ascii_digit() { c.to_digit(10) } else { None })
}

pub(crate) fn digit_count(s: &str) -> usize {
    s.chars().filter(|c| c.is_ascii_digit()).count()
}

/// Digit sum, or `None` when the string has no digits at all.
pub(crate) fn digit_sum(s: &str) -> Option<u64> {
    let mut seen = false;
    let sum = digit_values(s).fold(0u64, |acc, d| {
        seen = true;
        acc + u64::from(d)
    });
    seen.then_some(sum)
}

pub(crate) fn reversed(s: &str) -> String {
    s.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_sum() {
        assert_eq!(digit_sum("a1b2c3"), Some(6));
        assert_eq!(digit_sum("abc"), None);
        assert_eq!(digit_sum("0"), Some(0));
    }

    #[test]
    fn test_non_ascii_digits_ignored() {
        // Arabic-Indic digits are not counted.
        assert_eq!(digit_count("\u{0661}\u{0662}3"), 1);
    }

    #[test]
    fn test_char_len_counts_scalars() {
        assert_eq!(char_len("\u{1F3CB}\u{FE0F}ab"), 4);
    }

    #[test]
    fn test_reversed() {
        assert_eq!(reversed("AB12"), "21BA");
    }
}
