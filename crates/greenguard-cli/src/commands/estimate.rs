use greenguard_core::config::AppConfig;
use greenguard_core::error::GreenGuardError;
use greenguard_core::estimators::builtin;
use greenguard_core::estimators::schema::EstimatorDef;
use greenguard_core::extraction::DocumentReader;
use greenguard_core::report::{renderer_for, EmissionReport};
use std::path::Path;

use crate::output;

pub fn run(
    input_file: &Path,
    kind: Option<&str>,
    preset: Option<&str>,
    estimator_file: Option<&Path>,
    output_format: &str,
    write_report: bool,
    config: &AppConfig,
) -> Result<(), GreenGuardError> {
    let estimator = resolve_estimator(preset, estimator_file)?;

    let document = super::load_document(input_file, kind)?;
    let reader = DocumentReader::from_config(&config.extraction);
    let result = greenguard_core::estimate_document(&document, &reader, &estimator);

    match output_format {
        "json" => output::json::print(&result)?,
        _ => output::table::print_estimate(&result, &estimator),
    }

    if write_report {
        match EmissionReport::for_estimate(&result) {
            Some(report) => {
                let path = renderer_for(&config.report).render(&report)?;
                eprintln!("Report written to {}", path.display());
            }
            None => eprintln!("No report written: {}", estimator.not_applicable_message()),
        }
    }

    Ok(())
}

fn resolve_estimator(
    preset: Option<&str>,
    estimator_file: Option<&Path>,
) -> Result<EstimatorDef, GreenGuardError> {
    match (preset, estimator_file) {
        (_, Some(path)) => greenguard_core::estimators::load_estimator(path),
        (Some(name), None) => builtin::load_preset(name),
        (None, None) => Err(GreenGuardError::EstimatorInvalid(format!(
            "no estimator specified. Use --preset ({}) or --estimator FILE",
            builtin::PRESETS.join(", ")
        ))),
    }
}
