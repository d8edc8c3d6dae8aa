use crate::traits::ProjectProbe;
use std::path::{Path, PathBuf};

/// Probe backed by the real filesystem, rooted at a project directory
#[derive(Debug, Clone)]
pub struct FilesystemProbe {
    root: PathBuf,
}

impl FilesystemProbe {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Probe rooted at the process working directory
    pub fn current_dir() -> Self {
        Self::new(".")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ProjectProbe for FilesystemProbe {
    fn exists(&self, path: &Path) -> bool {
        if path.as_os_str().is_empty() {
            return false;
        }
        let full = self.root.join(path);
        let found = full.exists();
        tracing::trace!(path = %full.display(), found, "probe exists");
        found
    }

    fn pattern_exists(&self, pattern: &str) -> bool {
        if pattern.is_empty() {
            return false;
        }

        // Escape the root so directory names like "[app]" stay literal
        let root = glob::Pattern::escape(&self.root.to_string_lossy());
        let full = format!("{}/{}", root.trim_end_matches('/'), pattern);

        let found = match glob::glob(&full) {
            Ok(mut paths) => paths.any(|entry| entry.is_ok()),
            Err(e) => {
                tracing::debug!(pattern, error = %e, "invalid glob pattern");
                false
            }
        };
        tracing::trace!(pattern = %full, found, "probe pattern");
        found
    }
}
