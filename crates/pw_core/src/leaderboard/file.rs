// JSON-file backend. The whole board is one array, rewritten atomically
// on every append.

use std::fs::{self, rename, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::{top_of, LeaderboardEntry, LeaderboardStore, NewEntry, StoreError};

pub struct JsonFileLeaderboard {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileLeaderboard {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), lock: Mutex::new(()) }
    }

    fn load(&self) -> Result<Vec<LeaderboardEntry>, StoreError> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let entries: Vec<LeaderboardEntry> = serde_json::from_slice(&data)?;
        log::debug!("Loaded {} leaderboard entries from {:?}", entries.len(), self.path);
        Ok(entries)
    }
}

impl LeaderboardStore for JsonFileLeaderboard {
    fn append(&self, entry: NewEntry) -> Result<LeaderboardEntry, StoreError> {
        let entry = entry.into_entry()?;
        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;

        let mut entries = self.load()?;
        entries.push(entry.clone());
        write_atomic(&self.path, &serde_json::to_vec_pretty(&entries)?)?;

        log::info!(
            "Recorded {} at {}s (score {}) in {:?}",
            entry.name,
            entry.elapsed_seconds,
            entry.score,
            self.path
        );
        Ok(entry)
    }

    fn top(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, StoreError> {
        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(top_of(self.load()?, limit))
    }
}

/// Write to a sibling temp file, fsync, then rename over `path`.
pub(crate) fn write_atomic(path: &Path, data: &[u8]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let temp_path = path.with_extension("tmp");
    {
        let mut file = File::create(&temp_path)?;
        file.write_all(data)?;
        file.flush()?;
        file.sync_all()?;
    }
    rename(&temp_path, path)?;

    log::debug!("Wrote {} bytes to {:?}", data.len(), path);
    Ok(())
}
