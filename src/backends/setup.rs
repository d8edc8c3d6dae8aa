//! Startup pass over backend descriptors
//!
//! Fills default values and checks mandatory metadata before a descriptor
//! is admitted into the registry.

use crate::backends::config::{BackendConfig, BinarySpecifier};
use crate::constants::NAME_PART_SEPARATOR;
use crate::error::{OmnipmError, Result};

/// A name or alias part is non-empty and uses only `[A-Za-z0-9_.+]`
fn is_valid_part(part: &str) -> bool {
    !part.is_empty()
        && part
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '+'))
}

/// Fill defaults and validate a descriptor in place
pub fn setup_backend(config: &mut BackendConfig) -> Result<()> {
    apply_defaults(config);
    validate_backend(config)
}

fn apply_defaults(config: &mut BackendConfig) {
    config.name = config.name.trim().to_string();
    config.alias = config.alias.trim().to_string();

    for pattern in &mut config.filename_patterns {
        *pattern = pattern.trim().to_string();
    }

    if config.binary.is_none() {
        // "nodejs-npm" -> "npm"
        if let Some(tool) = config.name.rsplit(NAME_PART_SEPARATOR).next() {
            if !tool.is_empty() {
                config.binary = Some(BinarySpecifier::Single(tool.to_string()));
            }
        }
    }
}

fn invalid(config: &BackendConfig, reason: impl Into<String>) -> OmnipmError {
    OmnipmError::InvalidBackend {
        name: config.name.clone(),
        reason: reason.into(),
    }
}

fn validate_backend(config: &BackendConfig) -> Result<()> {
    if config.name.is_empty() {
        return Err(invalid(config, "name cannot be empty"));
    }

    if let Some(part) = config.name_parts().find(|part| !is_valid_part(part)) {
        return Err(invalid(
            config,
            format!("name part '{}' must be non-empty and use only [A-Za-z0-9_.+]", part),
        ));
    }

    if !config.alias.is_empty() {
        if let Some(part) = config.alias_parts().find(|part| !is_valid_part(part)) {
            return Err(invalid(
                config,
                format!("alias part '{}' must be non-empty and use only [A-Za-z0-9_.+]", part),
            ));
        }
    }

    if config.specfile.as_os_str().is_empty() {
        return Err(invalid(config, "'specfile' is required"));
    }

    if config.lockfile.as_os_str().is_empty() {
        return Err(invalid(config, "'lockfile' is required"));
    }

    if config.filename_patterns.is_empty() {
        return Err(invalid(config, "at least one filename pattern is required"));
    }

    for pattern in &config.filename_patterns {
        if pattern.is_empty() {
            return Err(invalid(config, "filename patterns cannot be empty"));
        }
        glob::Pattern::new(pattern)
            .map_err(|e| invalid(config, format!("invalid filename pattern '{}': {}", pattern, e)))?;
    }

    match &config.binary {
        Some(BinarySpecifier::Multiple(binaries)) if binaries.is_empty() => {
            return Err(invalid(config, "binary requires at least one value"));
        }
        Some(binary) if binary.candidates().iter().any(|bin| bin.trim().is_empty()) => {
            return Err(invalid(config, "binary names cannot be empty"));
        }
        _ => {}
    }

    Ok(())
}
