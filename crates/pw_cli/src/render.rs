// Text rendering for the terminal UI.

use serde::Serialize;
use std::fmt::Write;

use pw_core::{
    format_time, EvaluationResult, GameSession, RuleInfo, RuleOutcome, SessionContext, RULE_COUNT,
};

pub const HELP: &str = "\
Type a password and press enter to check it.
  /remove   use your one-time rule removal
  /board    show the leaderboard
  /copy     print the current password
  /hint     show the active rule's hint
  /help     this text
  /quit     leave
Start a password with // to enter a leading slash.";

/// Header line plus the active rule and its hint.
pub fn status(session: &GameSession) -> String {
    let result = session.result();
    let time = format_time(session.elapsed_seconds());
    let mut out = String::new();

    match result {
        EvaluationResult::Complete => {
            let _ = writeln!(out, "[CLEARED] Progress {}/{}  {}", RULE_COUNT, RULE_COUNT, time);
            let _ = write!(out, "ACCESS GRANTED");
        }
        EvaluationResult::Blocked(rule) => {
            let _ = writeln!(
                out,
                "[LVL {}] Progress {}/{}  {}  {}",
                rule.id,
                rule.id,
                RULE_COUNT,
                progress_bar(result.progress(), 20),
                time
            );
            let _ = write!(out, "Rule {}: {}", rule.id, rule.description);
            if let Some(hint) = session.hint() {
                let _ = write!(out, "\n  hint: {}", hint);
            }
        }
    }
    out
}

pub fn progress_bar(fraction: f32, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f32).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
}

/// One-shot `check` output.
pub fn check_line(result: &EvaluationResult, context: &SessionContext) -> String {
    match result {
        EvaluationResult::Complete => "ACCESS GRANTED: all rules pass".to_string(),
        EvaluationResult::Blocked(rule) => match rule.context_key {
            Some(key) => format!(
                "Blocked at rule {}: {} ({}: {})",
                rule.id,
                rule.description,
                key,
                context.hint(key)
            ),
            None => format!("Blocked at rule {}: {}", rule.id, rule.description),
        },
    }
}

/// One row of `check --all`: the rule's public fields plus the verdict.
#[derive(Debug, Serialize)]
pub struct CheckedRule {
    #[serde(flatten)]
    pub rule: RuleInfo,
    pub passed: bool,
}

pub fn checked_rules(outcomes: &[RuleOutcome]) -> Vec<CheckedRule> {
    outcomes
        .iter()
        .filter_map(|outcome| {
            let rule = pw_core::rule(outcome.id)?.info();
            Some(CheckedRule { rule, passed: outcome.passed })
        })
        .collect()
}

pub fn outcome_table(outcomes: &[RuleOutcome]) -> String {
    let rows = checked_rules(outcomes);
    let mut out = String::new();
    for row in &rows {
        let mark = if row.passed { "pass" } else { "FAIL" };
        let _ = writeln!(out, "{:>2} {} {}", row.rule.id, mark, row.rule.description);
    }
    let passed = rows.iter().filter(|r| r.passed).count();
    let _ = writeln!(out, "{}/{} rules pass", passed, rows.len());
    out
}
