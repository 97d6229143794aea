//! Leaderboard Store
//!
//! Append-only list of finished runs. Reads return the fastest runs first;
//! ties on time fall back to the higher score.

pub mod error;
pub mod file;
pub mod flag;
pub mod memory;

pub use error::StoreError;
pub use file::JsonFileLeaderboard;
pub use flag::SubmissionFlag;
pub use memory::MemoryLeaderboard;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

use crate::rules::RULE_COUNT;

pub const DEFAULT_LIMIT: usize = 10;

const POINTS_PER_RULE: i64 = 1000;
const PENALTY_PER_SECOND: i64 = 5;
const MEDALS: [&str; 3] = ["\u{1F947}", "\u{1F948}", "\u{1F949}"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub elapsed_seconds: u64,
    pub score: i64,
    pub created_at: DateTime<Utc>,
}

/// An entry before the store stamps it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub name: String,
    pub elapsed_seconds: u64,
    pub score: i64,
}

impl NewEntry {
    pub fn new(name: impl Into<String>, elapsed_seconds: u64) -> Self {
        Self { name: name.into(), elapsed_seconds, score: score_for(elapsed_seconds) }
    }

    /// Trim the name and stamp the entry with the current time.
    pub(crate) fn into_entry(self) -> Result<LeaderboardEntry, StoreError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(StoreError::InvalidName);
        }
        Ok(LeaderboardEntry {
            name: name.to_string(),
            elapsed_seconds: self.elapsed_seconds,
            score: self.score,
            created_at: Utc::now(),
        })
    }
}

pub trait LeaderboardStore: Send + Sync {
    fn append(&self, entry: NewEntry) -> Result<LeaderboardEntry, StoreError>;

    /// Best `limit` entries, fastest first.
    fn top(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, StoreError>;
}

/// `rules × 1000 − elapsed × 5`. Slow runs go negative.
pub fn score_for(elapsed_seconds: u64) -> i64 {
    let penalty = i64::try_from(elapsed_seconds)
        .unwrap_or(i64::MAX)
        .saturating_mul(PENALTY_PER_SECOND);
    (RULE_COUNT as i64 * POINTS_PER_RULE).saturating_sub(penalty)
}

/// `MM:SS`, zero padded. Minutes past 99 keep growing.
pub fn format_time(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Time ascending, then score descending. Stable, so equal runs keep
/// submission order.
pub(crate) fn rank(entries: &mut [LeaderboardEntry]) {
    entries.sort_by(|a, b| {
        a.elapsed_seconds.cmp(&b.elapsed_seconds).then_with(|| b.score.cmp(&a.score))
    });
}

pub(crate) fn top_of(mut entries: Vec<LeaderboardEntry>, limit: usize) -> Vec<LeaderboardEntry> {
    rank(&mut entries);
    entries.truncate(limit);
    entries
}

/// Text table: medal or rank, name, time, score, date.
pub fn render_board(entries: &[LeaderboardEntry]) -> String {
    if entries.is_empty() {
        return "No runs recorded yet.".to_string();
    }

    let mut out = String::new();
    for (i, entry) in entries.iter().enumerate() {
        let rank = match MEDALS.get(i) {
            Some(medal) => medal.to_string(),
            None => format!("#{}", i + 1),
        };
        let _ = writeln!(
            out,
            "{:<4} {:<20} {:>6} {:>7}  {}",
            rank,
            entry.name,
            format_time(entry.elapsed_seconds),
            entry.score,
            entry.created_at.format("%Y-%m-%d"),
        );
    }
    out
}
