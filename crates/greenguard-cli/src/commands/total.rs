use greenguard_core::config::AppConfig;
use greenguard_core::error::GreenGuardError;
use greenguard_core::extraction::DocumentReader;
use greenguard_core::report::{renderer_for, EmissionReport};
use std::path::Path;

use crate::output;

pub fn run(
    input_file: &Path,
    kind: Option<&str>,
    output_format: &str,
    write_report: bool,
    show_trace: bool,
    config: &AppConfig,
) -> Result<(), GreenGuardError> {
    let document = super::load_document(input_file, kind)?;
    let reader = DocumentReader::from_config(&config.extraction);
    let result = greenguard_core::analyze_document(&document, &reader);

    match output_format {
        "json" => output::json::print(&result)?,
        _ => output::table::print_dashboard(&result, show_trace),
    }

    if write_report {
        if result.no_match {
            eprintln!("No report written: no relevant emission data found");
        } else {
            let report = EmissionReport::for_dashboard(&result);
            let path = renderer_for(&config.report).render(&report)?;
            eprintln!("Report written to {}", path.display());
        }
    }

    Ok(())
}
