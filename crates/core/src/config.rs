//! Collection configuration via `modelkit.toml`
//!
//! A [`ListConfig`] names the identity key a keyed list uses and whether it
//! drops duplicate identities when it is first filled. Every field has a
//! default, so an empty file is a valid config.

use crate::error::{Error, Result};
use crate::key::DEFAULT_KEY;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Conventional config file name.
pub const CONFIG_FILE_NAME: &str = "modelkit.toml";

/// Configuration for a keyed model list.
///
/// # Example
///
/// ```toml
/// # Field that holds each model's identity (default: "id")
/// key = "windowId"
///
/// # Drop later models sharing an identity when the list is built
/// dedupe_on_load = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListConfig {
    /// Identity field name
    #[serde(default = "default_key")]
    pub key: String,
    /// Deduplicate models by identity when the list is built
    #[serde(default)]
    pub dedupe_on_load: bool,
}

fn default_key() -> String {
    DEFAULT_KEY.to_string()
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            key: default_key(),
            dedupe_on_load: false,
        }
    }
}

impl ListConfig {
    /// Config with a custom identity key
    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    /// Check the config for values no list can work with.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the key is empty or only whitespace.
    pub fn validate(&self) -> Result<()> {
        if self.key.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "key must name a field, got an empty string".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ListConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content).map_err(|e| match e {
            Error::Serialization(msg) => Error::Serialization(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                msg
            )),
            other => other,
        })?;
        debug!(target: "modelkit::config", path = %path.display(), key = %config.key, "Loaded list config");
        Ok(config)
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# modelkit list configuration
#
# Field that holds each model's identity (default: "id")
key = "id"

# Drop later models sharing an identity when the list is built (default: false)
dedupe_on_load = false
"#
    }
}
