//! Linker output configuration read from the KConfig `autoconf.json`.
//!
//! Only the `features` object is consulted. Keys the packer does not know
//! about are ignored, and the two it does know fall back to defaults:
//!
//! | Key                        | Field               | Default |
//! |----------------------------|---------------------|---------|
//! | `LINK_OUT_FILE_BASENAME`   | `output_basename`   | `main`  |
//! | `LINK_OUT_FILE_EXTENSIONS` | `output_extensions` | `exe`   |
//!
//! The extension list is a comma-separated string in the JSON file.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::error::{PackError, Result};

const FEATURES_KEY: &str = "features";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackagingConfig {
    #[serde(
        rename = "LINK_OUT_FILE_BASENAME",
        default = "default_basename",
        deserialize_with = "trimmed"
    )]
    pub output_basename: String,

    #[serde(
        rename = "LINK_OUT_FILE_EXTENSIONS",
        default = "default_extensions",
        deserialize_with = "split_extensions",
        serialize_with = "join_extensions"
    )]
    pub output_extensions: Vec<String>,
}

impl Default for PackagingConfig {
    fn default() -> Self {
        Self {
            output_basename: default_basename(),
            output_extensions: default_extensions(),
        }
    }
}

impl PackagingConfig {
    /// Load the `features` object of an autoconf JSON file.
    ///
    /// A missing file is reported as [`PackError::ConfigNotFound`] so callers
    /// can tell it apart from a file that exists but is malformed.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => PackError::ConfigNotFound {
                path: path.to_path_buf(),
            },
            _ => PackError::io(path, e),
        })?;
        let config = Self::from_json_str(&text, path)?;
        debug!(
            path = %path.display(),
            basename = %config.output_basename,
            extensions = ?config.output_extensions,
            "loaded packaging config"
        );
        Ok(config)
    }

    /// Parse autoconf JSON text. `origin` is only used in error messages.
    pub fn from_json_str(text: &str, origin: &Path) -> Result<Self> {
        let document: serde_json::Value = serde_json::from_str(text)
            .map_err(|e| PackError::config_format(origin, format!("invalid JSON: {e}")))?;

        let features = document.get(FEATURES_KEY).ok_or_else(|| {
            PackError::config_format(origin, format!("missing top-level '{FEATURES_KEY}' object"))
        })?;
        if !features.is_object() {
            return Err(PackError::config_format(
                origin,
                format!("'{FEATURES_KEY}' must be an object"),
            ));
        }

        let config: Self = serde_json::from_value(features.clone())
            .map_err(|e| PackError::config_format(origin, e.to_string()))?;
        config.validate(origin)?;
        Ok(config)
    }

    fn validate(&self, origin: &Path) -> Result<()> {
        if self.output_basename.is_empty() {
            return Err(PackError::config_format(
                origin,
                "LINK_OUT_FILE_BASENAME must not be empty",
            ));
        }
        if self.output_extensions.iter().any(|ext| ext.is_empty()) {
            return Err(PackError::config_format(
                origin,
                format!(
                    "LINK_OUT_FILE_EXTENSIONS contains an empty entry: '{}'",
                    self.output_extensions.join(",")
                ),
            ));
        }
        Ok(())
    }
}

/// Pretty JSON in the same shape as the `features` keys it was loaded from.
/// This is the text packaged as `readme.txt`.
impl fmt::Display for PackagingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string_pretty(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

fn default_basename() -> String {
    "main".to_string()
}

fn default_extensions() -> Vec<String> {
    vec!["exe".to_string()]
}

fn trimmed<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().to_string())
}

fn split_extensions<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.split(',').map(|ext| ext.trim().to_string()).collect())
}

fn join_extensions<S>(extensions: &[String], serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&extensions.join(","))
}
