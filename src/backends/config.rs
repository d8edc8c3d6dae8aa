use crate::constants::NAME_PART_SEPARATOR;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Descriptor of a language backend
///
/// Holds only the metadata needed to decide whether a backend owns a project;
/// the package operations themselves live with each backend's tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Canonical identifier made of hyphen-separated parts (e.g. "python3-poetry")
    pub name: String,

    /// Secondary hyphen-separated identifier used for matching (e.g. "python-python3-poetry")
    /// Empty when the backend has no alias
    pub alias: String,

    /// Manifest declaring direct dependencies, relative to the project directory
    pub specfile: PathBuf,

    /// Lockfile pinning resolved versions, relative to the project directory
    pub lockfile: PathBuf,

    /// Glob patterns whose presence is weak evidence for this backend
    pub filename_patterns: Vec<String>,

    /// Tool(s) that must be on PATH for the backend to be usable
    /// Filled from the last name part during setup when not given
    pub binary: Option<BinarySpecifier>,
}

impl BackendConfig {
    /// Parts of the canonical name ("python3-poetry" -> ["python3", "poetry"])
    pub fn name_parts(&self) -> impl Iterator<Item = &str> {
        self.name.split(NAME_PART_SEPARATOR)
    }

    /// Parts of the alias; an empty alias yields a single empty part
    pub fn alias_parts(&self) -> impl Iterator<Item = &str> {
        self.alias.split(NAME_PART_SEPARATOR)
    }

    /// Whether the underlying tool is installed on this host
    pub fn is_available(&self) -> bool {
        self.binary
            .as_ref()
            .is_some_and(|binary| binary.find_available().is_some())
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            name: "unknown".to_string(),
            alias: String::new(),
            specfile: PathBuf::new(),
            lockfile: PathBuf::new(),
            filename_patterns: Vec::new(),
            binary: None,
        }
    }
}

/// Binary specifier - can be single or multiple alternatives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BinarySpecifier {
    Single(String),
    Multiple(Vec<String>),
}

impl BinarySpecifier {
    /// Get the first available binary
    pub fn find_available(&self) -> Option<String> {
        match self {
            BinarySpecifier::Single(bin) => which::which(bin).ok().map(|_| bin.clone()),
            BinarySpecifier::Multiple(binaries) => binaries
                .iter()
                .find(|bin| which::which(bin.as_str()).is_ok())
                .cloned(),
        }
    }

    /// Get the primary binary name (for display/error messages)
    pub fn primary(&self) -> String {
        match self {
            BinarySpecifier::Single(bin) => bin.clone(),
            BinarySpecifier::Multiple(binaries) => binaries
                .first()
                .cloned()
                .unwrap_or_else(|| "unknown".to_string()),
        }
    }

    /// All candidate binary names, in lookup order
    pub fn candidates(&self) -> Vec<&str> {
        match self {
            BinarySpecifier::Single(bin) => vec![bin.as_str()],
            BinarySpecifier::Multiple(binaries) => binaries.iter().map(String::as_str).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_specifier_single() {
        let bin = BinarySpecifier::Single("poetry".to_string());
        assert_eq!(bin.primary(), "poetry");
        assert_eq!(bin.candidates(), vec!["poetry"]);
    }

    #[test]
    fn test_binary_specifier_multiple() {
        let bin = BinarySpecifier::Multiple(vec!["pip3".to_string(), "pip".to_string()]);
        assert_eq!(bin.primary(), "pip3");
        assert_eq!(bin.candidates(), vec!["pip3", "pip"]);
    }

    #[test]
    fn test_missing_binary_is_unavailable() {
        let config = BackendConfig {
            name: "ghost".to_string(),
            binary: Some(BinarySpecifier::Single(
                "omnipm-definitely-not-installed-tool".to_string(),
            )),
            ..Default::default()
        };
        assert!(!config.is_available());
    }

    #[test]
    fn test_no_binary_is_unavailable() {
        let config = BackendConfig::default();
        assert!(!config.is_available());
    }

    #[test]
    fn test_name_and_alias_parts() {
        let config = BackendConfig {
            name: "python3-poetry".to_string(),
            alias: "python-python3-poetry".to_string(),
            ..Default::default()
        };
        assert_eq!(config.name_parts().collect::<Vec<_>>(), vec!["python3", "poetry"]);
        assert_eq!(
            config.alias_parts().collect::<Vec<_>>(),
            vec!["python", "python3", "poetry"]
        );
    }

    #[test]
    fn test_empty_alias_has_single_empty_part() {
        let config = BackendConfig::default();
        assert_eq!(config.alias_parts().collect::<Vec<_>>(), vec![""]);
    }
}
