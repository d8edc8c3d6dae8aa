//! Language Matching Module
//!
//! Decides whether a `--lang` value refers to a backend.
//!
//! # Rules
//!
//! Backend names and aliases are made of hyphen-separated parts. A value
//! matches when every one of its parts appears among the backend's name
//! parts, or, failing that, among its alias parts. For example the
//! `python3-poetry` backend (alias `python-python3-poetry`) matches
//! `--lang=python-poetry` and `--lang=python3` but not `--lang=python2`.
//!
//! Parts are compared exactly: no case folding, no prefixes, no substrings
//! (`python3` does not match a `python321` part).

use crate::backends::config::BackendConfig;
use crate::constants::NAME_PART_SEPARATOR;
use std::collections::HashSet;

/// Check if a backend matches a value for the --lang argument
pub fn matches_language(backend: &BackendConfig, language: &str) -> bool {
    let name_parts: HashSet<&str> = backend.name_parts().collect();
    if all_parts_in(language, &name_parts) {
        return true;
    }

    let alias_parts: HashSet<&str> = backend.alias_parts().collect();
    all_parts_in(language, &alias_parts)
}

fn all_parts_in(language: &str, parts: &HashSet<&str>) -> bool {
    language
        .split(NAME_PART_SEPARATOR)
        .all(|part| parts.contains(part))
}

#[cfg(test)]
mod tests;
