//! Diagnostic logging setup
//!
//! User-facing messages go through [`crate::ui`]; this module wires the
//! `tracing` events emitted by the registry, probe and resolver to stderr.
//!
//! Level precedence: `OMNIPM_LOG` (any `EnvFilter` directive), then
//! `--verbose` (debug), then `--quiet` (error), then warn.

use crate::constants::LOG_ENV_VAR;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Ensures logging is only initialized once
static INIT: Once = Once::new();

/// Pick the default level from CLI flags
pub fn level_for(verbose: bool, quiet: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else if quiet {
        Level::ERROR
    } else {
        Level::WARN
    }
}

/// Build the filter: the env var wins over the flag-derived level
pub fn build_filter(env_directive: Option<&str>, level: Level) -> EnvFilter {
    if let Some(directive) = env_directive {
        match EnvFilter::try_new(directive) {
            Ok(filter) => return filter,
            Err(e) => {
                eprintln!(
                    "Invalid {} value '{}' ({}), using level {}",
                    LOG_ENV_VAR, directive, e, level
                );
            }
        }
    }

    EnvFilter::new(format!("omnipm={}", level.to_string().to_lowercase()))
}

/// Initialize the global subscriber; later calls are no-ops
pub fn init_logging(verbose: bool, quiet: bool) {
    INIT.call_once(|| {
        let env_directive = std::env::var(LOG_ENV_VAR).ok();
        let filter = build_filter(env_directive.as_deref(), level_for(verbose, quiet));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .try_init();
    });
}
