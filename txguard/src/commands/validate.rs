// txguard/src/commands/validate.rs
//
// USE CASE: Validate one CSV file from disk.

use std::path::PathBuf;

use anyhow::Context;
use comfy_table::Table;
use txguard_core::application::{ValidationEngine, validate_path};
use txguard_core::infrastructure::config::Settings;
use txguard_core::{Severity, ValidationReport};

use crate::cli::OutputFormat;

/// Exit code when the file could not be validated at all.
const EXIT_REFUSED: i32 = 2;
/// Exit code when the report contains findings.
const EXIT_INVALID: i32 = 1;

pub fn execute(file: PathBuf, format: OutputFormat, settings: &Settings) -> anyhow::Result<()> {
    let engine = ValidationEngine::default();

    let report = match validate_path(&file, &engine, settings) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("❌ Cannot validate {}", file.display());
            eprintln!("{:?}", miette::Report::new(e));
            std::process::exit(EXIT_REFUSED);
        }
    };

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .context("Failed to serialize validation report")?;
            println!("{}", json);
        }
        OutputFormat::Table => println!("{}", render_table(&report)),
    }

    if !report.is_valid() {
        std::process::exit(EXIT_INVALID);
    }
    Ok(())
}

fn render_table(report: &ValidationReport) -> String {
    let summary = format!(
        "{} {}: {} rows, {} errors, {} warnings",
        if report.is_valid() { "✅" } else { "❌" },
        report.file(),
        report.total_rows(),
        report.count_by_severity(Severity::Error),
        report.count_by_severity(Severity::Warning),
    );
    if report.errors().is_empty() {
        return summary;
    }

    let mut table = Table::new();
    table.set_header(vec!["Row", "Column", "Severity", "Message"]);
    for e in report.errors() {
        table.add_row(vec![
            e.row.to_string(),
            e.column.clone(),
            e.severity.to_string(),
            e.message.clone(),
        ]);
    }
    format!("{}\n{}", table, summary)
}
