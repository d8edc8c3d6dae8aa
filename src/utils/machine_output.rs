use crate::error::{OmnipmError, Result};
use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MachineEnvelope<T>
where
    T: Serialize,
{
    pub version: String,
    pub command: String,
    pub ok: bool,
    pub data: T,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
    pub meta: MachineMeta,
}

#[derive(Debug, Serialize)]
pub struct MachineMeta {
    pub generated_at: String,
}

/// Formats accepted by `--format` besides the human-readable table
pub fn is_machine_format(format: &str) -> bool {
    matches!(format, "json" | "yaml")
}

pub fn render_v1<T>(command: &str, data: T, warnings: Vec<String>, format: &str) -> Result<String>
where
    T: Serialize,
{
    let envelope = MachineEnvelope {
        version: "v1".to_string(),
        command: command.to_string(),
        ok: true,
        data,
        warnings,
        errors: Vec::new(),
        meta: MachineMeta {
            generated_at: Utc::now().to_rfc3339(),
        },
    };

    match format {
        "json" => Ok(serde_json::to_string_pretty(&envelope)?),
        "yaml" => Ok(serde_yml::to_string(&envelope)?),
        other => Err(OmnipmError::Other(format!(
            "Unsupported output format '{}'. Valid: table, json, yaml",
            other
        ))),
    }
}

pub fn emit_v1<T>(command: &str, data: T, warnings: Vec<String>, format: &str) -> Result<()>
where
    T: Serialize,
{
    let out = render_v1(command, data, warnings, format)?;
    println!("{}", out.trim_end());
    Ok(())
}
