use crate::classify::outcome::{DashboardResult, EstimateResult};
use crate::config::{ReportConfig, ReportFormat};
use crate::error::GreenGuardError;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

pub const TOTAL_REPORT_TITLE: &str = "Total Emission Summary Report";

/// Numeric facts and labels handed to a report renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmissionReport {
    pub title: String,
    pub generated_at: DateTime<Local>,
    pub total_units: f64,
    pub emission: f64,
    pub unit_label: String,
    pub gas_label: String,
}

impl EmissionReport {
    pub fn new(
        title: impl Into<String>,
        total_units: f64,
        emission: f64,
        unit_label: impl Into<String>,
        gas_label: impl Into<String>,
    ) -> Self {
        EmissionReport {
            title: title.into(),
            generated_at: Local::now(),
            total_units,
            emission,
            unit_label: unit_label.into(),
            gas_label: gas_label.into(),
        }
    }

    pub fn with_timestamp(mut self, generated_at: DateTime<Local>) -> Self {
        self.generated_at = generated_at;
        self
    }

    /// Summary across all categories, with generic labels.
    pub fn for_dashboard(result: &DashboardResult) -> Self {
        Self::new(
            TOTAL_REPORT_TITLE,
            result.total_usage(),
            result.total_emission(),
            "units",
            "kg CO2",
        )
    }

    /// `None` when the estimator did not apply to the document.
    pub fn for_estimate(result: &EstimateResult) -> Option<Self> {
        let estimate = result.estimate?;
        Some(Self::new(
            result.title.clone(),
            estimate.total_units,
            estimate.emission,
            result.unit_label.clone(),
            result.gas_label.clone(),
        ))
    }

    /// Title with underscores plus a filesystem-safe timestamp.
    pub fn file_stem(&self) -> String {
        format!(
            "{}_{}",
            self.title.trim().replace(' ', "_"),
            self.generated_at.format("%Y-%m-%d_%H-%M-%S")
        )
    }

    pub fn timestamp(&self) -> String {
        self.generated_at.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Turns an [`EmissionReport`] into a downloadable artifact.
pub trait ReportRenderer {
    /// Write the report and return the path of the artifact.
    fn render(&self, report: &EmissionReport) -> Result<PathBuf, GreenGuardError>;

    fn format_name(&self) -> &str;
}

pub struct TextReportRenderer {
    output_dir: PathBuf,
}

impl TextReportRenderer {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

impl ReportRenderer for TextReportRenderer {
    fn render(&self, report: &EmissionReport) -> Result<PathBuf, GreenGuardError> {
        let body = format!(
            "GreenGuard AI\n{}\nGenerated on: {}\n\nTotal Units Detected: {} {}\nEstimated Emissions: {} {}\n",
            report.title,
            report.timestamp(),
            format_quantity(report.total_units),
            report.unit_label,
            format_quantity(report.emission),
            report.gas_label
        );
        write_artifact(&self.output_dir, &format!("{}.txt", report.file_stem()), &body)
    }

    fn format_name(&self) -> &str {
        "text"
    }
}

pub struct JsonReportRenderer {
    output_dir: PathBuf,
}

impl JsonReportRenderer {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

impl ReportRenderer for JsonReportRenderer {
    fn render(&self, report: &EmissionReport) -> Result<PathBuf, GreenGuardError> {
        let body = serde_json::to_string_pretty(report)?;
        write_artifact(&self.output_dir, &format!("{}.json", report.file_stem()), &body)
    }

    fn format_name(&self) -> &str {
        "json"
    }
}

pub fn renderer_for(config: &ReportConfig) -> Box<dyn ReportRenderer> {
    match config.format {
        ReportFormat::Text => Box::new(TextReportRenderer::new(config.output_dir.clone())),
        ReportFormat::Json => Box::new(JsonReportRenderer::new(config.output_dir.clone())),
    }
}

/// Whole numbers keep one decimal place ("600.0"), others print as-is.
fn format_quantity(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

fn write_artifact(dir: &Path, file_name: &str, body: &str) -> Result<PathBuf, GreenGuardError> {
    std::fs::create_dir_all(dir)
        .map_err(|e| GreenGuardError::Report(format!("{}: {}", dir.display(), e)))?;
    let path = dir.join(file_name);
    std::fs::write(&path, body)
        .map_err(|e| GreenGuardError::Report(format!("{}: {}", path.display(), e)))?;
    info!(path = %path.display(), "report written");
    Ok(path)
}
