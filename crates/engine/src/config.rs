//! Store configuration.
//!
//! Read from the `[store]` table of the host's TOML file. Every field has a
//! default, so an empty table is a valid configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File name of the snapshot inside `data_dir`.
pub const DEFAULT_FILE_NAME: &str = "dictionary.dat";

/// What `TermStore::open` does when the snapshot exists but cannot be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadPolicy {
    /// Return the load error to the caller (default).
    #[default]
    Strict,
    /// Log the error and start with an empty table.
    ///
    /// The next successful mutation overwrites the unreadable file.
    StartEmpty,
}

/// Configuration for a [`TermStore`](crate::TermStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory holding the snapshot file.
    pub data_dir: PathBuf,
    /// Snapshot file name inside `data_dir`.
    pub file_name: String,
    /// Behaviour on an unreadable snapshot.
    pub load_policy: LoadPolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            file_name: DEFAULT_FILE_NAME.to_string(),
            load_policy: LoadPolicy::Strict,
        }
    }
}

impl StoreConfig {
    /// Default configuration rooted at `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Set the load policy.
    pub fn load_policy(mut self, policy: LoadPolicy) -> Self {
        self.load_policy = policy;
        self
    }

    /// Full path of the snapshot file.
    pub fn path(&self) -> PathBuf {
        self.data_dir.join(&self.file_name)
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML configuration file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

/// Errors from reading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        /// Config file path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML for this configuration
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::from_toml_str("").unwrap();
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.path(), PathBuf::from("./dictionary.dat"));
    }

    #[test]
    fn test_parse_all_fields() {
        let config = StoreConfig::from_toml_str(
            r#"
            data_dir = "/var/lib/bot"
            file_name = "terms.dat"
            load_policy = "start_empty"
            "#,
        )
        .unwrap();
        assert_eq!(config.path(), PathBuf::from("/var/lib/bot/terms.dat"));
        assert_eq!(config.load_policy, LoadPolicy::StartEmpty);
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let err = StoreConfig::from_toml_str(r#"load_policy = "yolo""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = StoreConfig::from_file(Path::new("/nonexistent/lexicon.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
