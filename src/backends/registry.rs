//! # Backend Registry
//!
//! Ordered list of language backends. If more than one backend could own the
//! same project, the one that comes first in the registry wins, so the order
//! of [`builtin_backends`] is the tie-break priority.
//!
//! The registry is assembled once at startup through [`RegistryBuilder`]:
//!
//! ```rust
//! use omnipm::backends::registry::RegistryBuilder;
//!
//! let registry = RegistryBuilder::new().with_builtins().build()?;
//! assert_eq!(registry.backends()[0].name, "python3-poetry");
//! # Ok::<(), omnipm::error::OmnipmError>(())
//! ```
//!
//! After `build()` there is no way to add, remove or modify descriptors.

use crate::backends::config::{BackendConfig, BinarySpecifier};
use crate::backends::setup::setup_backend;
use crate::error::{OmnipmError, Result};
use serde::Serialize;
use std::collections::HashSet;
use std::path::PathBuf;

const NODEJS_PATTERNS: &[&str] = &["*.js", "*.jsx", "*.mjs", "*.cjs", "*.ts", "*.tsx"];

fn builtin(
    name: &str,
    alias: &str,
    specfile: &str,
    lockfile: &str,
    patterns: &[&str],
    binary: BinarySpecifier,
) -> BackendConfig {
    BackendConfig {
        name: name.to_string(),
        alias: alias.to_string(),
        specfile: PathBuf::from(specfile),
        lockfile: PathBuf::from(lockfile),
        filename_patterns: patterns.iter().map(|p| p.to_string()).collect(),
        binary: Some(binary),
    }
}

fn single(bin: &str) -> BinarySpecifier {
    BinarySpecifier::Single(bin.to_string())
}

/// Get built-in backend descriptors, in priority order
pub fn builtin_backends() -> Vec<BackendConfig> {
    vec![
        // === Python ===
        builtin(
            "python3-poetry",
            "python-python3-poetry",
            "pyproject.toml",
            "poetry.lock",
            &["*.py"],
            single("poetry"),
        ),
        builtin(
            "python3-pip",
            "python-python3-pip",
            "requirements.txt",
            "requirements.txt",
            &["*.py"],
            BinarySpecifier::Multiple(vec!["pip3".to_string(), "pip".to_string()]),
        ),
        // === JavaScript / TypeScript ===
        builtin(
            "bun",
            "javascript-typescript-nodejs-bun",
            "package.json",
            "bun.lockb",
            NODEJS_PATTERNS,
            single("bun"),
        ),
        builtin(
            "nodejs-npm",
            "javascript-typescript-nodejs-npm",
            "package.json",
            "package-lock.json",
            NODEJS_PATTERNS,
            single("npm"),
        ),
        builtin(
            "nodejs-pnpm",
            "javascript-typescript-nodejs-pnpm",
            "package.json",
            "pnpm-lock.yaml",
            NODEJS_PATTERNS,
            single("pnpm"),
        ),
        builtin(
            "nodejs-yarn",
            "javascript-typescript-nodejs-yarn",
            "package.json",
            "yarn.lock",
            NODEJS_PATTERNS,
            single("yarn"),
        ),
        // === Others ===
        builtin(
            "ruby-bundler",
            "ruby-bundle",
            "Gemfile",
            "Gemfile.lock",
            &["*.rb"],
            single("bundle"),
        ),
        builtin(
            "elisp-cask",
            "emacs-lisp-elisp-cask",
            "Cask",
            "packages.txt",
            &["*.el"],
            single("cask"),
        ),
        builtin(
            "dart-pub",
            "dart-flutter-pub",
            "pubspec.yaml",
            "pubspec.lock",
            &["*.dart"],
            single("dart"),
        ),
        // Maven has no separate lockfile
        builtin(
            "java-maven",
            "java-mvn-maven",
            "pom.xml",
            "pom.xml",
            &["*.java"],
            single("mvn"),
        ),
        builtin(
            "rlang",
            "r-rlang",
            "DESCRIPTION",
            "renv.lock",
            &["*.r", "*.R"],
            single("Rscript"),
        ),
        builtin(
            "dotnet",
            "csharp-fsharp-dotnet-nuget",
            "packages.config",
            "packages.lock.json",
            &["*.cs", "*.csproj", "*.fs", "*.fsproj"],
            single("dotnet"),
        ),
        builtin(
            "rust-cargo",
            "rust-rustlang-cargo",
            "Cargo.toml",
            "Cargo.lock",
            &["*.rs"],
            single("cargo"),
        ),
        builtin(
            "php-composer",
            "php-composer",
            "composer.json",
            "composer.lock",
            &["*.php"],
            single("composer"),
        ),
    ]
}

/// Name and availability of a registered backend, for listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackendInfo {
    pub name: String,
    pub available: bool,
}

/// Immutable, ordered set of validated backend descriptors
#[derive(Debug, Clone)]
pub struct BackendRegistry {
    backends: Vec<BackendConfig>,
}

impl BackendRegistry {
    /// Descriptors in priority order
    pub fn backends(&self) -> &[BackendConfig] {
        &self.backends
    }

    /// Look up a descriptor by its canonical name
    pub fn get(&self, name: &str) -> Option<&BackendConfig> {
        self.backends.iter().find(|b| b.name == name)
    }

    /// Canonical names in priority order
    pub fn names(&self) -> Vec<&str> {
        self.backends.iter().map(|b| b.name.as_str()).collect()
    }

    /// Canonical names (e.g. "python3-poetry", not just "python3") plus
    /// whether each backend's tool is installed
    pub fn backend_infos(&self) -> Vec<BackendInfo> {
        self.backends
            .iter()
            .map(|b| BackendInfo {
                name: b.name.clone(),
                available: b.is_available(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.backends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }
}

/// Collects descriptors and runs the setup pass to produce a [`BackendRegistry`]
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    backends: Vec<BackendConfig>,
}

impl RegistryBuilder {
    /// Create a new empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Append all built-in backends
    pub fn with_builtins(mut self) -> Self {
        self.backends.extend(builtin_backends());
        self
    }

    /// Append a descriptor at the lowest priority
    pub fn register(mut self, backend: BackendConfig) -> Self {
        self.backends.push(backend);
        self
    }

    /// Merge user-defined backends
    ///
    /// A user backend named like an already registered one replaces it in
    /// place and keeps its priority. New names go to the end, in file order.
    pub fn with_overrides(mut self, overrides: Vec<BackendConfig>) -> Result<Self> {
        let mut seen = HashSet::new();

        for backend in overrides {
            let name = backend.name.trim().to_string();
            if !seen.insert(name.clone()) {
                return Err(OmnipmError::DuplicateBackend(name));
            }

            match self.backends.iter_mut().find(|b| b.name == name) {
                Some(existing) => {
                    tracing::debug!(backend = %name, "user backend overrides built-in");
                    *existing = backend;
                }
                None => {
                    tracing::debug!(backend = %name, "user backend registered");
                    self.backends.push(backend);
                }
            }
        }

        Ok(self)
    }

    /// Run setup on every descriptor and freeze the result
    pub fn build(self) -> Result<BackendRegistry> {
        let mut backends = self.backends;
        let mut names = HashSet::new();

        for backend in &mut backends {
            setup_backend(backend)?;
            if !names.insert(backend.name.clone()) {
                return Err(OmnipmError::DuplicateBackend(backend.name.clone()));
            }
        }

        if backends.is_empty() {
            return Err(OmnipmError::ConfigError(
                "no language backends are registered".to_string(),
            ));
        }

        tracing::debug!(count = backends.len(), "backend registry ready");

        Ok(BackendRegistry { backends })
    }
}
