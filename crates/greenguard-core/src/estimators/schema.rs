use serde::{Deserialize, Serialize};

/// A single-category estimator: keyword presence check, document-wide
/// number sum, linear factor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EstimatorDef {
    pub name: String,
    /// Report title, e.g. "Carbon Emission Report".
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Case-insensitive trigger phrases; any one present makes the
    /// estimator applicable.
    pub keywords: Vec<String>,
    /// Units to emission. Negative for absorption.
    pub factor: f64,
    /// Decimal places kept on the emission.
    #[serde(default = "default_precision")]
    pub precision: u32,
    #[serde(default = "default_unit_label")]
    pub unit_label: String,
    #[serde(default = "default_gas_label")]
    pub gas_label: String,
    /// Shown when no keyword matches.
    #[serde(default)]
    pub not_applicable: Option<String>,
}

impl EstimatorDef {
    pub fn not_applicable_message(&self) -> String {
        self.not_applicable.clone().unwrap_or_else(|| {
            format!(
                "This document does not appear to contain data for '{}'.",
                self.name
            )
        })
    }
}

/// File format for a set of estimator definitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatorSet {
    pub version: String,
    pub estimators: Vec<EstimatorDef>,
}

pub fn default_precision() -> u32 {
    4
}

fn default_unit_label() -> String {
    "units".to_string()
}

fn default_gas_label() -> String {
    "kg CO2".to_string()
}
