use crate::backends::config::BackendConfig;
use crate::backends::registry::BackendRegistry;
use crate::core::matcher::matches_language;
use crate::core::types::{Resolution, Selection};
use crate::error::{OmnipmError, Result};
use crate::traits::ProjectProbe;

/// Pick the backend for a --lang value (empty for none) and a project
pub fn resolve<'a>(
    language: &str,
    registry: &'a BackendRegistry,
    probe: &dyn ProjectProbe,
) -> Result<&'a BackendConfig> {
    resolve_detailed(language, registry, probe).map(|resolution| resolution.backend)
}

/// Same as [`resolve`], also reporting which rule made the choice
///
/// 1. A non-empty `language` narrows the registry with the matcher. No match
///    is an error; a single match is returned without looking at the project.
/// 2. The remaining backends are scanned in registry order, three times:
///    specfile and lockfile, then specfile or lockfile, then filename patterns.
/// 3. Nothing found: an error without a hint, the first narrowed backend with one.
pub fn resolve_detailed<'a>(
    language: &str,
    registry: &'a BackendRegistry,
    probe: &dyn ProjectProbe,
) -> Result<Resolution<'a>> {
    let mut candidates: Vec<&'a BackendConfig> = registry.backends().iter().collect();

    if !language.is_empty() {
        candidates.retain(|b| matches_language(b, language));
        tracing::debug!(
            language,
            matches = ?candidates.iter().map(|b| b.name.as_str()).collect::<Vec<_>>(),
            "narrowed backends by language"
        );

        match candidates.as_slice() {
            [] => return Err(OmnipmError::UnknownLanguage(language.to_string())),
            [only] => {
                return Ok(Resolution {
                    backend: *only,
                    selection: Selection::Hint,
                });
            }
            _ => {}
        }
    }

    if let Some(resolution) = detect(&candidates, probe) {
        tracing::debug!(
            backend = %resolution.backend.name,
            selection = %resolution.selection,
            "autodetected backend"
        );
        return Ok(resolution);
    }

    if language.is_empty() {
        return Err(OmnipmError::NoLanguageDetected);
    }

    // Several backends matched the hint; commit to the highest priority one
    match candidates.first() {
        Some(first) => {
            tracing::debug!(backend = %first.name, "no project files found, using first match");
            Ok(Resolution {
                backend: *first,
                selection: Selection::HintFallback,
            })
        }
        None => Err(OmnipmError::UnknownLanguage(language.to_string())),
    }
}

/// Run the three evidence passes over `candidates`, strongest first
fn detect<'a>(
    candidates: &[&'a BackendConfig],
    probe: &dyn ProjectProbe,
) -> Option<Resolution<'a>> {
    let strong = candidates
        .iter()
        .find(|b| probe.exists(&b.specfile) && probe.exists(&b.lockfile));
    if let Some(backend) = strong {
        return Some(Resolution {
            backend: *backend,
            selection: Selection::StrongEvidence,
        });
    }

    let partial = candidates
        .iter()
        .find(|b| probe.exists(&b.specfile) || probe.exists(&b.lockfile));
    if let Some(backend) = partial {
        return Some(Resolution {
            backend: *backend,
            selection: Selection::PartialEvidence,
        });
    }

    candidates.iter().find_map(|backend| {
        backend
            .filename_patterns
            .iter()
            .find(|pattern| probe.pattern_exists(pattern))
            .map(|pattern| Resolution {
                backend: *backend,
                selection: Selection::WeakEvidence {
                    pattern: pattern.clone(),
                },
            })
    })
}
