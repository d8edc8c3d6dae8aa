//! User-defined backend parser
//!
//! Parses backend definitions from KDL configuration files, allowing users to
//! teach omnipm about additional ecosystems or adjust the built-in ones.
//!
//! ```kdl
//! backend "zig-zon" {
//!     alias "zig-ziglang"
//!     specfile "build.zig.zon"
//!     lockfile "build.zig.zon"
//!     patterns "*.zig"
//!     binary "zig"
//! }
//! ```

use crate::backends::config::{BackendConfig, BinarySpecifier};
use crate::error::{OmnipmError, Result};
use kdl::{KdlDocument, KdlNode};
use std::path::{Path, PathBuf};

/// Load user-defined backends from a KDL backend config file.
///
/// A missing file yields no backends.
pub fn load_user_backends(path: &Path) -> Result<Vec<BackendConfig>> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no user backends file");
        return Ok(Vec::new());
    }

    let kdl_source = std::fs::read_to_string(path).map_err(|source| OmnipmError::IoError {
        path: path.to_path_buf(),
        source,
    })?;

    parse_backends(&kdl_source).map_err(|e| {
        OmnipmError::ConfigError(format!("{}: {}", path.display(), e))
    })
}

/// Parse every `backend` node of a KDL document
pub fn parse_backends(content: &str) -> Result<Vec<BackendConfig>> {
    let doc = KdlDocument::parse(content)?;

    let mut backends = Vec::new();
    for node in doc.nodes() {
        match node.name().value() {
            "backend" => backends.push(parse_backend_node(node)?),
            other => {
                return Err(OmnipmError::ConfigError(format!(
                    "Unknown top-level node '{}'. Expected: backend \"name\" {{ ... }}",
                    other
                )));
            }
        }
    }

    Ok(backends)
}

/// Parse a single backend node
fn parse_backend_node(node: &KdlNode) -> Result<BackendConfig> {
    let name = first_string(node).ok_or_else(|| {
        OmnipmError::ConfigError(
            "Backend name required. Usage: backend \"name\" { ... }".to_string(),
        )
    })?;

    // Fields left empty here are caught by the registry setup pass
    let mut config = BackendConfig {
        name: name.clone(),
        ..Default::default()
    };

    if let Some(children) = node.children() {
        for child in children.nodes() {
            match child.name().value() {
                "alias" => config.alias = required_string(child, &name)?,
                "specfile" => config.specfile = PathBuf::from(required_string(child, &name)?),
                "lockfile" => config.lockfile = PathBuf::from(required_string(child, &name)?),
                "patterns" | "filename_patterns" => {
                    config.filename_patterns = strings(child);
                }
                "binary" => parse_binary(child, &mut config)?,
                other => {
                    tracing::warn!(backend = %name, field = other, "ignoring unknown backend field");
                }
            }
        }
    }

    Ok(config)
}

/// Positional string arguments of a node
fn strings(node: &KdlNode) -> Vec<String> {
    node.entries()
        .iter()
        .filter(|entry| entry.name().is_none())
        .filter_map(|entry| entry.value().as_string())
        .map(str::to_string)
        .collect()
}

fn first_string(node: &KdlNode) -> Option<String> {
    strings(node).into_iter().next()
}

fn required_string(node: &KdlNode, backend: &str) -> Result<String> {
    first_string(node).ok_or_else(|| {
        OmnipmError::ConfigError(format!(
            "Backend '{}': '{}' requires a string value",
            backend,
            node.name().value()
        ))
    })
}

/// Parse binary specification
fn parse_binary(node: &KdlNode, config: &mut BackendConfig) -> Result<()> {
    let mut values = strings(node);

    if values.is_empty() {
        return Err(OmnipmError::ConfigError(
            "Binary requires at least one value. Usage: binary \"cmd1\" \"cmd2\"".to_string(),
        ));
    }

    config.binary = Some(match values.len() {
        1 => BinarySpecifier::Single(values.remove(0)),
        _ => BinarySpecifier::Multiple(values),
    });

    Ok(())
}

#[cfg(test)]
mod tests;
