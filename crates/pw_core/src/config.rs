//! Game configuration
//!
//! ```yaml
//! leaderboard_path: leaderboard.json
//! submission_flag_path: submitted.json
//! leaderboard_limit: 10
//! seed: 42          # optional; omit for a random puzzle
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::leaderboard::DEFAULT_LIMIT;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub leaderboard_path: PathBuf,
    pub submission_flag_path: PathBuf,
    pub leaderboard_limit: usize,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            leaderboard_path: PathBuf::from("leaderboard.json"),
            submission_flag_path: PathBuf::from("submitted.json"),
            leaderboard_limit: DEFAULT_LIMIT,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&text)?;
        log::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Parse and validate. Missing keys take their defaults.
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.leaderboard_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "leaderboard_limit",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.leaderboard_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "leaderboard_path",
                reason: "must not be empty".to_string(),
            });
        }
        if self.submission_flag_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "submission_flag_path",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.leaderboard_limit, 10);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = GameConfig::from_yaml("seed: 42\n").unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.leaderboard_path, PathBuf::from("leaderboard.json"));
    }

    #[test]
    fn test_zero_limit_rejected() {
        let err = GameConfig::from_yaml("leaderboard_limit: 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "leaderboard_limit", .. }));
    }

    #[test]
    fn test_bad_yaml() {
        assert!(matches!(
            GameConfig::from_yaml("leaderboard_limit: [1, 2"),
            Err(ConfigError::Yaml(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("game.yaml");
        std::fs::write(&path, "leaderboard_path: /tmp/board.json\nleaderboard_limit: 5\n").unwrap();

        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config.leaderboard_limit, 5);
        assert_eq!(config.leaderboard_path, PathBuf::from("/tmp/board.json"));
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            GameConfig::load(&dir.path().join("absent.yaml")),
            Err(ConfigError::Io(_))
        ));
    }
}
