use crate::cli::dispatcher::Context;
use crate::core::{Selection, resolve_detailed};
use crate::error::Result;
use crate::ui as output;
use crate::utils::machine_output;
use serde::Serialize;

/// Machine-readable answer of `which-language`
#[derive(Debug, Serialize)]
pub struct WhichReport {
    pub name: String,
    /// First candidate binary of the backend
    pub tool: Option<String>,
    pub available: bool,
    pub selection: Selection,
}

pub fn report(context: &Context) -> Result<WhichReport> {
    let resolution = resolve_detailed(&context.language, &context.registry, &context.probe)?;

    Ok(WhichReport {
        name: resolution.backend.name.clone(),
        tool: resolution.backend.binary.as_ref().map(|binary| binary.primary()),
        available: resolution.backend.is_available(),
        selection: resolution.selection,
    })
}

pub fn run(context: &Context) -> Result<()> {
    let report = report(context)?;

    if machine_output::is_machine_format(&context.format) {
        let mut warnings = Vec::new();
        if !report.available {
            warnings.push(format!("no tool for '{}' found on PATH", report.name));
        }
        return machine_output::emit_v1("which-language", report, warnings, &context.format);
    }

    if report.selection == Selection::HintFallback {
        output::warning(&format!(
            "'{}' matches several backends and none has project files; using {}",
            context.language, report.name
        ));
    }

    println!("{}", report.name);
    output::verbose(&format!("Selected because: {}", report.selection));
    if !report.available {
        output::verbose(&format!(
            "'{}' is not installed",
            report.tool.as_deref().unwrap_or(&report.name)
        ));
    }

    Ok(())
}
