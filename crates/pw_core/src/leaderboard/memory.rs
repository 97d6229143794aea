use std::sync::Mutex;

use super::{top_of, LeaderboardEntry, LeaderboardStore, NewEntry, StoreError};

/// Process-local board. Used by tests and `--leaderboard :memory:`.
#[derive(Default)]
pub struct MemoryLeaderboard {
    entries: Mutex<Vec<LeaderboardEntry>>,
}

impl MemoryLeaderboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LeaderboardStore for MemoryLeaderboard {
    fn append(&self, entry: NewEntry) -> Result<LeaderboardEntry, StoreError> {
        let entry = entry.into_entry()?;
        let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        entries.push(entry.clone());
        log::debug!("Recorded {} in memory ({} total)", entry.name, entries.len());
        Ok(entry)
    }

    fn top(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, StoreError> {
        let entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(top_of(entries.clone(), limit))
    }
}
