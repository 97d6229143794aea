//! Rule Evaluator
//!
//! Walks the catalog in order and stops at the first rule that fails.
//! Later rules are never run, so they are never revealed.

use serde::{Serialize, Serializer};

use crate::clock::Clock;
use crate::context::SessionContext;
use crate::rules::{catalog, EvaluationMetadata, Probe, Rule, RULE_COUNT};

/// Outcome of one evaluation. Recomputed from scratch on every edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationResult {
    Complete,
    Blocked(&'static Rule),
}

impl EvaluationResult {
    pub fn is_complete(&self) -> bool {
        matches!(self, EvaluationResult::Complete)
    }

    pub fn blocking_rule(&self) -> Option<&'static Rule> {
        match self {
            EvaluationResult::Complete => None,
            EvaluationResult::Blocked(rule) => Some(rule),
        }
    }

    /// Active level: the blocking rule's id, or the rule count once cleared.
    pub fn level(&self) -> u32 {
        match self {
            EvaluationResult::Complete => RULE_COUNT as u32,
            EvaluationResult::Blocked(rule) => rule.id,
        }
    }

    /// Fraction of the progress bar to fill, in `0.0..=1.0`.
    pub fn progress(&self) -> f32 {
        self.level() as f32 / RULE_COUNT as f32
    }
}

impl Serialize for EvaluationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        #[serde(tag = "status", rename_all = "snake_case")]
        enum Repr {
            Complete,
            Blocked { rule: u32, description: &'static str },
        }

        match self {
            EvaluationResult::Complete => Repr::Complete,
            EvaluationResult::Blocked(rule) => {
                Repr::Blocked { rule: rule.id, description: rule.description }
            }
        }
        .serialize(serializer)
    }
}

/// Pass/fail for one rule, used by diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleOutcome {
    pub id: u32,
    pub passed: bool,
}

/// Find the first failing rule.
///
/// The clock is read once so every time-dependent rule sees the same
/// instant. `metadata.level` is ignored; it is set per rule.
pub fn evaluate(
    candidate: &str,
    context: &SessionContext,
    metadata: EvaluationMetadata,
    clock: &dyn Clock,
) -> EvaluationResult {
    let now = clock.now();
    for rule in catalog() {
        if !check_rule(rule, candidate, context, metadata, now) {
            return EvaluationResult::Blocked(rule);
        }
    }
    EvaluationResult::Complete
}

/// Run every rule, regardless of earlier failures.
pub fn evaluate_all(
    candidate: &str,
    context: &SessionContext,
    metadata: EvaluationMetadata,
    clock: &dyn Clock,
) -> Vec<RuleOutcome> {
    let now = clock.now();
    catalog()
        .iter()
        .map(|rule| RuleOutcome {
            id: rule.id,
            passed: check_rule(rule, candidate, context, metadata, now),
        })
        .collect()
}

fn check_rule(
    rule: &Rule,
    candidate: &str,
    context: &SessionContext,
    metadata: EvaluationMetadata,
    now: chrono::NaiveDateTime,
) -> bool {
    let probe = Probe {
        candidate,
        fact: rule.context_key.map(|key| context.fact(key)),
        meta: EvaluationMetadata { level: rule.id, ..metadata },
        now,
    };
    rule.check(&probe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn clock() -> FixedClock {
        FixedClock::at(2024, 3, 15, 10, 30)
    }

    fn blocked_at(candidate: &str) -> Option<u32> {
        let ctx = SessionContext::from_seed(42);
        evaluate(candidate, &ctx, EvaluationMetadata::default(), &clock())
            .blocking_rule()
            .map(|r| r.id)
    }

    #[test]
    fn test_empty_fails_first_rule() {
        assert_eq!(blocked_at(""), Some(1));
    }

    #[test]
    fn test_eight_letters_blocked_at_two() {
        assert_eq!(blocked_at("AAAAAAAA"), Some(2));
    }

    #[test]
    fn test_digit_sum_blocks_at_five() {
        assert_eq!(blocked_at("Ab12!@IVIV"), Some(5));
    }

    #[test]
    fn test_idempotent() {
        let ctx = SessionContext::from_seed(9);
        let meta = EvaluationMetadata::default();
        let a = evaluate("Ab29!@IV\u{1F600}\u{1F525}", &ctx, meta, &clock());
        let b = evaluate("Ab29!@IV\u{1F600}\u{1F525}", &ctx, meta, &clock());
        assert_eq!(a, b);
    }

    #[test]
    fn test_blocked_rule_is_first_failure() {
        let ctx = SessionContext::from_seed(5);
        let meta = EvaluationMetadata::default();
        for candidate in ["", "AAAAAAAA", "Ab12!@IVIV", "Ab29!@IV\u{1F600}\u{1F525}"] {
            let outcomes = evaluate_all(candidate, &ctx, meta, &clock());
            let first_failure = outcomes.iter().find(|o| !o.passed).map(|o| o.id);
            let blocked = evaluate(candidate, &ctx, meta, &clock()).blocking_rule().map(|r| r.id);
            assert_eq!(first_failure, blocked, "candidate {:?}", candidate);
        }
    }

    #[test]
    fn test_progress_through_context_rule() {
        let ctx = SessionContext::from_seed(11);
        // Rules 1-7 satisfied; digit sum 2+9 = 11.
        let base = "Ab29!@IV\u{1F600}\u{1F525}";
        let result = evaluate(base, &ctx, EvaluationMetadata::default(), &clock());
        assert_eq!(result.level(), 8);

        let with_company = format!("{}{}", base, ctx.company);
        let result = evaluate(&with_company, &ctx, EvaluationMetadata::default(), &clock());
        assert_eq!(result.level(), 9);
    }

    #[test]
    fn test_level_and_progress() {
        let ctx = SessionContext::from_seed(1);
        let result = evaluate("", &ctx, EvaluationMetadata::default(), &clock());
        assert_eq!(result.level(), 1);
        assert!((result.progress() - 0.02).abs() < 1e-6);
        assert_eq!(EvaluationResult::Complete.level(), 50);
        assert_eq!(EvaluationResult::Complete.progress(), 1.0);
    }

    #[test]
    fn test_serialize_result() {
        let ctx = SessionContext::from_seed(1);
        let result = evaluate("AAAAAAAA", &ctx, EvaluationMetadata::default(), &clock());
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["status"], "blocked");
        assert_eq!(json["rule"], 2);
        let json = serde_json::to_value(EvaluationResult::Complete).unwrap();
        assert_eq!(json["status"], "complete");
    }

    #[test]
    fn test_very_long_candidate() {
        let ctx = SessionContext::from_seed(13);
        let meta = EvaluationMetadata { level: 0, rule_removed: true };
        // 8 chars per chunk, 120k chars total.
        let candidate = "\u{1F600}1DONEa\u{221E}".repeat(15_000);
        assert_eq!(candidate.chars().count(), 120_000);

        let outcomes = evaluate_all(&candidate, &ctx, meta, &clock());
        assert_eq!(outcomes.len(), RULE_COUNT);

        let result = evaluate(&candidate, &ctx, meta, &clock());
        let first_failure = outcomes.iter().find(|o| !o.passed).map(|o| o.id);
        assert_eq!(result.blocking_rule().map(|r| r.id), first_failure);
    }

    #[cfg(all(test, feature = "proptest"))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any string evaluates without panicking
            #[test]
            fn prop_never_panics(candidate in any::<String>(), seed in any::<u64>(), removed in any::<bool>()) {
                let ctx = SessionContext::from_seed(seed);
                let meta = EvaluationMetadata { level: 0, rule_removed: removed };
                let result = evaluate(&candidate, &ctx, meta, &clock());
                prop_assert!(result.level() >= 1 && result.level() <= RULE_COUNT as u32);
            }

            /// Property: same inputs, same result
            #[test]
            fn prop_idempotent(candidate in "\\PC{0,40}", seed in any::<u64>()) {
                let ctx = SessionContext::from_seed(seed);
                let meta = EvaluationMetadata::default();
                prop_assert_eq!(
                    evaluate(&candidate, &ctx, meta, &clock()),
                    evaluate(&candidate, &ctx, meta, &clock())
                );
            }

            /// Property: the reported rule is the lowest failing one
            #[test]
            fn prop_blocked_is_first_failure(candidate in "[A-Za-z0-9!@#IVX ]{0,30}", seed in any::<u64>()) {
                let ctx = SessionContext::from_seed(seed);
                let meta = EvaluationMetadata::default();
                let outcomes = evaluate_all(&candidate, &ctx, meta, &clock());
                let first_failure = outcomes.iter().find(|o| !o.passed).map(|o| o.id);
                let blocked = evaluate(&candidate, &ctx, meta, &clock()).blocking_rule().map(|r| r.id);
                prop_assert_eq!(first_failure, blocked);
            }
        }
    }
}
