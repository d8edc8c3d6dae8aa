//! Backend selection: hint matching and project autodetection

pub mod matcher;
pub mod resolver;
pub mod types;

pub use matcher::matches_language;
pub use resolver::{resolve, resolve_detailed};
pub use types::{Resolution, Selection};
