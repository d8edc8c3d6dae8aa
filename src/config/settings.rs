//! Settings Module
//!
//! Reads omnipm settings (default language, color, verbosity) from
//! `config.kdl`:
//!
//! ```kdl
//! settings {
//!     language "python"
//!     color "never"
//!     verbose "true"
//! }
//! ```
//!
//! Settings are read once at startup and never written back.

use crate::error::{OmnipmError, Result};
use crate::utils::paths;
use kdl::{KdlDocument, KdlNode, KdlValue};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const VALID_KEYS: &[&str] = &["language", "color", "verbose"];

/// Settings manager
#[derive(Debug, Clone)]
pub struct Settings {
    values: HashMap<String, String>,
}

impl Settings {
    /// Load settings from the config directory, or use defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_file()?)
    }

    /// Load settings from a specific file, or use defaults when it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| OmnipmError::IoError {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content)
            .map_err(|e| OmnipmError::ConfigError(format!("{}: {}", path.display(), e)))
    }

    /// Parse settings from KDL content
    pub fn parse(content: &str) -> Result<Self> {
        let doc = KdlDocument::parse(content)?;
        let mut settings = Self::default();

        for node in doc.nodes() {
            match node.name().value() {
                "settings" => {
                    if let Some(children) = node.children() {
                        for child in children.nodes() {
                            settings.apply(child)?;
                        }
                    }
                }
                other => {
                    return Err(OmnipmError::ConfigError(format!(
                        "Unknown top-level node '{}'. Expected: settings {{ ... }}",
                        other
                    )));
                }
            }
        }

        Ok(settings)
    }

    fn apply(&mut self, node: &KdlNode) -> Result<()> {
        let key = node.name().value().to_string();
        validate_key(&key)?;

        let value = node
            .entries()
            .iter()
            .find(|entry| entry.name().is_none())
            .map(|entry| value_to_string(entry.value()))
            .ok_or_else(|| {
                OmnipmError::ConfigError(format!("Setting '{}' requires a value", key))
            })?;

        validate_value(&key, &value)?;
        self.values.insert(key, value);
        Ok(())
    }

    /// Get a setting value
    pub fn get(&self, key: &str) -> Option<&String> {
        self.values.get(key)
    }

    /// Default language hint used when --lang is not given
    pub fn language(&self) -> Option<&str> {
        self.get("language")
            .map(String::as_str)
            .filter(|lang| !lang.is_empty())
    }

    /// "auto", "always" or "never"
    pub fn color(&self) -> &str {
        self.get("color").map(String::as_str).unwrap_or("auto")
    }

    pub fn verbose(&self) -> bool {
        self.get("verbose").is_some_and(|v| v == "true")
    }

    /// Get all settings
    pub fn all(&self) -> &HashMap<String, String> {
        &self.values
    }

    /// Get default settings
    fn defaults() -> HashMap<String, String> {
        let mut defaults = HashMap::new();
        defaults.insert("color".to_string(), "auto".to_string());
        defaults.insert("verbose".to_string(), "false".to_string());
        defaults
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            values: Self::defaults(),
        }
    }
}

fn value_to_string(value: &KdlValue) -> String {
    match value.as_string() {
        Some(s) => s.to_string(),
        None => match value.as_bool() {
            Some(b) => b.to_string(),
            None => value.to_string(),
        },
    }
}

/// Validate setting key
fn validate_key(key: &str) -> Result<()> {
    if !VALID_KEYS.contains(&key) {
        return Err(OmnipmError::ConfigError(format!(
            "Unknown setting: '{}'. Valid settings: {}",
            key,
            VALID_KEYS.join(", ")
        )));
    }

    Ok(())
}

/// Validate setting value
fn validate_value(key: &str, value: &str) -> Result<()> {
    let valid: &[&str] = match key {
        "color" => &["auto", "always", "never"],
        "verbose" => &["true", "false"],
        "language" => {
            if value.trim().is_empty() {
                return Err(OmnipmError::ConfigError(
                    "Setting 'language' cannot be empty".to_string(),
                ));
            }
            return Ok(());
        }
        _ => return Ok(()),
    };

    if !valid.contains(&value) {
        return Err(OmnipmError::ConfigError(format!(
            "Invalid value for '{}': '{}'. Valid: {}",
            key,
            value,
            valid.join(", ")
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests;
