//! Command dispatcher
//!
//! Performs process setup (settings, output, logging, backend registry) and
//! routes CLI commands to their handlers.

use crate::backends::{BackendRegistry, RegistryBuilder, load_user_backends};
use crate::cli::args::{Cli, Command};
use crate::commands;
use crate::config::Settings;
use crate::error::{OmnipmError, Result};
use crate::ui as output;
use crate::utils::machine_output::is_machine_format;
use crate::utils::{logging, paths, probe::FilesystemProbe};
use std::path::Path;

/// Everything a command needs, assembled once at startup
pub struct Context {
    pub registry: BackendRegistry,
    pub probe: FilesystemProbe,
    /// --lang value, else the `language` setting, else empty (autodetect)
    pub language: String,
    /// "table", "json" or "yaml"
    pub format: String,
}

/// Dispatch the parsed CLI command to the appropriate handler
pub fn dispatch(args: &Cli) -> Result<()> {
    if let Command::Completions { shell } = &args.command {
        return commands::completions::run(*shell);
    }

    let context = build_context(args)?;

    match &args.command {
        Command::WhichLanguage => commands::which::run(&context),
        Command::ListLanguages => commands::list::run(&context),
        Command::Completions { .. } => Ok(()),
    }
}

fn build_context(args: &Cli) -> Result<Context> {
    let settings = Settings::load()?;

    let verbose = args.global.verbose || (settings.verbose() && !args.global.quiet);
    output::init_colors(settings.color());
    output::set_quiet(args.global.quiet);
    output::set_verbose(verbose);
    logging::init_logging(verbose, args.global.quiet);

    let format = args
        .global
        .format
        .clone()
        .unwrap_or_else(|| "table".to_string());
    if format != "table" && !is_machine_format(&format) {
        return Err(OmnipmError::Other(format!(
            "Unsupported output format '{}'. Valid: table, json, yaml",
            format
        )));
    }

    let registry = build_registry(&paths::backends_file()?)?;

    let probe = match &args.global.project_dir {
        Some(dir) => {
            if !dir.is_dir() {
                return Err(OmnipmError::Other(format!(
                    "Project directory not found: {}",
                    dir.display()
                )));
            }
            FilesystemProbe::new(dir)
        }
        None => FilesystemProbe::current_dir(),
    };

    let language = args
        .global
        .lang
        .clone()
        .or_else(|| settings.language().map(str::to_string))
        .unwrap_or_default();

    Ok(Context {
        registry,
        probe,
        language,
        format,
    })
}

/// Built-in backends plus the user's backends file; any invalid descriptor is fatal
pub fn build_registry(backends_file: &Path) -> Result<BackendRegistry> {
    let user_backends = load_user_backends(backends_file)?;
    if !user_backends.is_empty() {
        output::verbose(&format!(
            "Loaded {} user backend(s) from {}",
            user_backends.len(),
            backends_file.display()
        ));
    }

    RegistryBuilder::new()
        .with_builtins()
        .with_overrides(user_backends)?
        .build()
}
