//! Game Session Controller
//!
//! Owns the candidate string, the last evaluation, the elapsed-time counter
//! and two one-shot flags:
//! - `rule_removed`, set by the player's single "remove a rule" action and
//!   read only by rule 40
//! - `already_submitted`, loaded from the persisted submission flag so a
//!   second leaderboard write is never requested
//!
//! ```text
//!   Playing --edit--> Playing
//!   Playing --edit (all rules pass)--> Complete   (clock frozen)
//!   Complete --edit--> Complete                   (state frozen)
//! ```

use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::context::SessionContext;
use crate::error::{CoreError, Result};
use crate::evaluator::{evaluate, EvaluationResult};
use crate::leaderboard::score_for;
use crate::rules::{EvaluationMetadata, Rule};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Playing,
    Complete,
}

/// Emitted once, on the first transition to `Complete`, when this
/// installation has not submitted a score yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubmissionRequest {
    pub elapsed_seconds: u64,
    pub score: i64,
}

/// What changed after an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditOutcome {
    pub result: EvaluationResult,
    pub completed_now: bool,
    pub submission: Option<SubmissionRequest>,
}

pub struct GameSession {
    context: SessionContext,
    candidate: String,
    result: EvaluationResult,
    state: SessionState,
    elapsed_seconds: u64,
    rule_removed: bool,
    already_submitted: bool,
}

impl GameSession {
    /// Start a session. The empty candidate is evaluated immediately.
    pub fn new(context: SessionContext, already_submitted: bool, clock: &dyn Clock) -> Self {
        let result = evaluate("", &context, EvaluationMetadata::default(), clock);
        log::info!("Session started at level {}", result.level());
        Self {
            context,
            candidate: String::new(),
            result,
            state: SessionState::Playing,
            elapsed_seconds: 0,
            rule_removed: false,
            already_submitted,
        }
    }

    /// Replace the candidate and re-run the whole chain.
    ///
    /// Once complete, the candidate is still stored but the state, result
    /// and clock stay frozen.
    pub fn edit(&mut self, candidate: impl Into<String>, clock: &dyn Clock) -> EditOutcome {
        self.candidate = candidate.into();
        if self.state == SessionState::Complete {
            return self.frozen_outcome();
        }
        self.reevaluate(clock)
    }

    /// The one-time "remove a previously satisfied rule" action.
    pub fn remove_rule(&mut self, clock: &dyn Clock) -> Result<EditOutcome> {
        if self.state != SessionState::Playing {
            return Err(CoreError::InvalidState { state: self.state });
        }
        if self.rule_removed {
            return Err(CoreError::RuleAlreadyRemoved);
        }
        self.rule_removed = true;
        log::info!("Rule removal used at level {}", self.result.level());
        Ok(self.reevaluate(clock))
    }

    /// Advance the timer by one second. No-op once complete.
    pub fn tick(&mut self) {
        if self.state == SessionState::Playing {
            self.elapsed_seconds += 1;
        }
    }

    /// Record that the score reached the leaderboard.
    pub fn mark_submitted(&mut self) {
        self.already_submitted = true;
    }

    fn reevaluate(&mut self, clock: &dyn Clock) -> EditOutcome {
        let previous_level = self.result.level();
        self.result = evaluate(&self.candidate, &self.context, self.metadata(), clock);

        if self.result.level() != previous_level {
            log::debug!("Level {} -> {}", previous_level, self.result.level());
        }

        if !self.result.is_complete() {
            return EditOutcome { result: self.result, completed_now: false, submission: None };
        }
        self.complete()
    }

    fn complete(&mut self) -> EditOutcome {
        self.result = EvaluationResult::Complete;
        self.state = SessionState::Complete;
        log::info!("Session complete in {} seconds", self.elapsed_seconds);

        let submission = (!self.already_submitted).then(|| SubmissionRequest {
            elapsed_seconds: self.elapsed_seconds,
            score: score_for(self.elapsed_seconds),
        });
        EditOutcome { result: self.result, completed_now: true, submission }
    }

    fn frozen_outcome(&self) -> EditOutcome {
        EditOutcome { result: self.result, completed_now: false, submission: None }
    }

    pub fn metadata(&self) -> EvaluationMetadata {
        EvaluationMetadata { level: 0, rule_removed: self.rule_removed }
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    pub fn candidate(&self) -> &str {
        &self.candidate
    }

    pub fn result(&self) -> EvaluationResult {
        self.result
    }

    pub fn active_rule(&self) -> Option<&'static Rule> {
        self.result.blocking_rule()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    pub fn rule_removed(&self) -> bool {
        self.rule_removed
    }

    pub fn already_submitted(&self) -> bool {
        self.already_submitted
    }

    /// The context fact shown beside the active rule, if it has one.
    pub fn hint(&self) -> Option<String> {
        let key = self.active_rule()?.context_key?;
        Some(self.context.hint(key))
    }
}
