//! # pw_core - Password Gauntlet Rule Engine
//!
//! Fifty ordered password rules, evaluated in sequence until the first one
//! fails. Later rules stay hidden until every earlier rule passes.
//!
//! ## Features
//! - Deterministic evaluation for a fixed candidate, context and clock
//! - Seeded session contexts for reproducible puzzles
//! - Session state machine with a one-shot rule removal
//! - Append-only leaderboard with JSON-file and in-memory backends

pub mod clock;
pub mod config;
pub mod context;
pub mod error;
pub mod evaluator;
pub mod leaderboard;
pub mod rules;
pub mod session;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::GameConfig;
pub use context::{ContextFact, ContextKey, SessionContext};
pub use error::{ConfigError, CoreError, Result};
pub use evaluator::{evaluate, evaluate_all, EvaluationResult, RuleOutcome};
pub use leaderboard::{
    format_time, render_board, score_for, JsonFileLeaderboard, LeaderboardEntry, LeaderboardStore,
    MemoryLeaderboard, NewEntry, StoreError, SubmissionFlag,
};
pub use rules::{catalog, rule, EvaluationMetadata, Rule, RuleInfo, RULE_COUNT};
pub use session::{EditOutcome, GameSession, SessionState, SubmissionRequest};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
