//! Host configuration file.
//!
//! ```toml
//! command_prefix = "!"
//! whitelist = ["*!*@localhost"]
//!
//! [store]
//! data_dir = "/var/lib/lexicon"
//! load_policy = "strict"
//!
//! [messages]
//! add_success = "Got it: {term}."
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use lexicon_engine::StoreConfig;
use lexicon_executor::Messages;
use lexicon_security::Whitelist;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Prefix that marks a chat line as a command
    pub command_prefix: String,
    /// Sender masks allowed to add and remove definitions
    pub whitelist: Whitelist,
    /// Store location and load policy
    pub store: StoreConfig,
    /// Response templates
    pub messages: Messages,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            command_prefix: "!".to_string(),
            whitelist: Whitelist::default(),
            store: StoreConfig::default(),
            messages: Messages::default(),
        }
    }
}

impl HostConfig {
    /// Load from `path`, or use defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("Invalid config {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexicon_engine::LoadPolicy;
    use lexicon_security::Authorizer;
    use std::path::PathBuf;

    #[test]
    fn test_no_path_gives_defaults() {
        let config = HostConfig::load(None).unwrap();
        assert_eq!(config.command_prefix, "!");
        assert!(config.whitelist.is_empty());
        assert_eq!(config.store, StoreConfig::default());
    }

    #[test]
    fn test_full_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("lexicon.toml");
        std::fs::write(
            &path,
            r#"
            command_prefix = "."
            whitelist = ["*!*@trusted"]

            [store]
            data_dir = "/srv/lexicon"
            load_policy = "start_empty"

            [messages]
            add_success = "Got it: {term}."
            "#,
        )
        .unwrap();

        let config = HostConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(config.command_prefix, ".");
        assert!(config.whitelist.is_authorized("a!b@trusted"));
        assert_eq!(config.store.data_dir, PathBuf::from("/srv/lexicon"));
        assert_eq!(config.store.load_policy, LoadPolicy::StartEmpty);
        assert_eq!(config.messages.add_success, "Got it: {term}.");
        assert_eq!(config.messages.define, Messages::default().define);
    }

    #[test]
    fn test_bad_mask_rejected() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("lexicon.toml");
        std::fs::write(&path, r#"whitelist = ["[oops"]"#).unwrap();
        assert!(HostConfig::load(Some(path.as_path())).is_err());
    }
}
