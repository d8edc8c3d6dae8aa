use crate::backends::config::BackendConfig;
use serde::Serialize;
use std::fmt;

// How the resolver arrived at its choice.
// Variants are listed from the most to the least explicit signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Selection {
    /// The hint matched exactly one backend; the project was not inspected
    Hint,
    /// Both specfile and lockfile exist
    StrongEvidence,
    /// Specfile or lockfile exists
    PartialEvidence,
    /// A filename pattern matched a file in the project
    WeakEvidence { pattern: String },
    /// The hint matched several backends and none had evidence; first one taken
    HintFallback,
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hint => write!(f, "matched --lang"),
            Self::StrongEvidence => write!(f, "specfile and lockfile found"),
            Self::PartialEvidence => write!(f, "specfile or lockfile found"),
            Self::WeakEvidence { pattern } => write!(f, "files matching '{}' found", pattern),
            Self::HintFallback => write!(f, "first backend matching --lang (no project files found)"),
        }
    }
}

/// Selected backend plus the reason it was selected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub backend: &'a BackendConfig,
    pub selection: Selection,
}
