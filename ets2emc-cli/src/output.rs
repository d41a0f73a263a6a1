//! Printing converted documents and diagnostics.
//!
//! The converted document is the only thing written to stdout, so the output
//! can be piped straight into the MediaConvert API tooling.

use crate::cli::DiagnosticsFormat;
use crate::error::CliResult;
use ets2emc_core::{Diagnostic, Diagnostics, Level};
use owo_colors::OwoColorize;
use serde_json::Value;
use std::io::{self, Write};

/// Check if color should be used (respects NO_COLOR environment variable)
fn should_use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Writes the converted document to stdout as pretty JSON.
pub fn print_document(document: &Value) -> CliResult<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, document)?;
    writeln!(stdout)?;
    Ok(())
}

/// Writes the diagnostics to stderr in the requested format.
pub fn print_diagnostics(diagnostics: &Diagnostics, format: DiagnosticsFormat) -> CliResult<()> {
    let mut stderr = io::stderr().lock();
    match format {
        DiagnosticsFormat::Json => {
            serde_json::to_writer_pretty(&mut stderr, diagnostics)?;
            writeln!(stderr)?;
        }
        DiagnosticsFormat::Text => {
            let color = should_use_color();
            for diagnostic in diagnostics.messages() {
                writeln!(stderr, "{}", format_diagnostic(diagnostic, color))?;
            }
            writeln!(stderr, "{}", format_summary(diagnostics, color))?;
        }
    }
    Ok(())
}

/// One diagnostic line, with the level tag coloured by severity.
pub fn format_diagnostic(diagnostic: &Diagnostic, color: bool) -> String {
    let tag = format!("[{}]", diagnostic.level);
    let tag = if color {
        match diagnostic.level {
            Level::Error => tag.red().bold().to_string(),
            Level::Warn => tag.yellow().to_string(),
            Level::Info => tag.cyan().to_string(),
        }
    } else {
        tag
    };

    if diagnostic.path.is_empty() {
        format!("{} {}", tag, diagnostic.message)
    } else if color {
        format!("{} {}: {}", tag, diagnostic.path.dimmed(), diagnostic.message)
    } else {
        format!("{} {}: {}", tag, diagnostic.path, diagnostic.message)
    }
}

fn format_summary(diagnostics: &Diagnostics, color: bool) -> String {
    let summary = format!(
        "{} error(s), {} warning(s), {} info message(s)",
        diagnostics.errors().len(),
        diagnostics.warnings().len(),
        diagnostics.infos().len()
    );
    match (color, diagnostics.has_errors()) {
        (true, true) => summary.red().bold().to_string(),
        (true, false) => summary.green().to_string(),
        (false, _) => summary,
    }
}
