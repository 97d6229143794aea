// "This installation already submitted a score." One small JSON file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::file::write_atomic;
use super::StoreError;

#[derive(Debug, Default, Serialize, Deserialize)]
struct FlagFile {
    submitted: bool,
}

pub struct SubmissionFlag {
    path: PathBuf,
}

impl SubmissionFlag {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file means "not yet".
    pub fn is_submitted(&self) -> Result<bool, StoreError> {
        match fs::read(&self.path) {
            Ok(data) => Ok(serde_json::from_slice::<FlagFile>(&data)?.submitted),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    pub fn mark_submitted(&self) -> Result<(), StoreError> {
        write_atomic(&self.path, &serde_json::to_vec(&FlagFile { submitted: true })?)?;
        log::info!("Submission flag set at {:?}", self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_flag_lifecycle() {
        let dir = TempDir::new().unwrap();
        let flag = SubmissionFlag::new(dir.path().join("submitted.json"));
        assert!(!flag.is_submitted().unwrap());

        flag.mark_submitted().unwrap();
        assert!(flag.is_submitted().unwrap());

        let reopened = SubmissionFlag::new(flag.path());
        assert!(reopened.is_submitted().unwrap());
    }

    #[test]
    fn test_explicit_false() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("submitted.json");
        fs::write(&path, br#"{"submitted": false}"#).unwrap();
        assert!(!SubmissionFlag::new(path).is_submitted().unwrap());
    }
}
