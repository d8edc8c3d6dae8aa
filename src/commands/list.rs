use crate::backends::BackendInfo;
use crate::cli::dispatcher::Context;
use crate::error::Result;
use crate::ui as output;
use crate::utils::machine_output;
use colored::Colorize;

pub fn run(context: &Context) -> Result<()> {
    let infos = context.registry.backend_infos();

    if machine_output::is_machine_format(&context.format) {
        return machine_output::emit_v1("list-languages", infos, Vec::new(), &context.format);
    }

    for info in &infos {
        println!("{}", format_row(info));
    }

    let available = infos.iter().filter(|info| info.available).count();
    output::verbose(&format!(
        "{} of {} backends have their tool installed",
        available,
        infos.len()
    ));

    Ok(())
}

fn format_row(info: &BackendInfo) -> String {
    if info.available {
        format!("{} {}", "✓".green(), info.name)
    } else {
        format!(
            "{} {} {}",
            "✗".red(),
            info.name,
            "(not available)".bright_black()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_row_is_marked() {
        colored::control::set_override(false);
        let row = format_row(&BackendInfo {
            name: "elisp-cask".to_string(),
            available: false,
        });
        assert_eq!(row, "✗ elisp-cask (not available)");
    }

    #[test]
    fn test_available_row_has_name() {
        colored::control::set_override(false);
        let row = format_row(&BackendInfo {
            name: "rust-cargo".to_string(),
            available: true,
        });
        assert_eq!(row, "✓ rust-cargo");
    }
}
