//! # Language Backends
//!
//! Descriptors of the package-manager integrations omnipm can hand a project
//! to, and the registry that orders them.
//!
//! ## Module Structure
//!
//! ### [`config`] - Backend Descriptor
//!
//! `BackendConfig` carries the metadata used to pick a backend:
//! - Canonical name and alias (hyphen-separated parts, used by `--lang`)
//! - Specfile and lockfile paths (strong/partial evidence)
//! - Filename patterns (weak evidence)
//! - Binary detection (availability on `PATH`)
//!
//! ### [`registry`] - Built-in Backends and the Registry
//!
//! Built-in descriptors in priority order, `RegistryBuilder` and the frozen
//! `BackendRegistry`.
//!
//! ### [`setup`] - Startup Validation
//!
//! Default filling and mandatory field checks run once per descriptor by
//! `RegistryBuilder::build`.
//!
//! ### [`user_parser`] - User-Defined Backends
//!
//! Loads extra or replacement descriptors from `backends.kdl` in the config
//! directory:
//!
//! ```kdl
//! backend "zig-zon" {
//!     alias "zig-ziglang"
//!     specfile "build.zig.zon"
//!     lockfile "build.zig.zon"
//!     patterns "*.zig"
//! }
//! ```

pub mod config;
pub mod registry;
pub mod setup;
pub mod user_parser;

pub use config::{BackendConfig, BinarySpecifier};
pub use registry::{BackendInfo, BackendRegistry, RegistryBuilder, builtin_backends};
pub use user_parser::load_user_backends;
