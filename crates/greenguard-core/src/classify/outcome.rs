use crate::model::Category;
use crate::registry;
use crate::trace::TraceBundle;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Accumulated usage per category, always holding all seven entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UsageTally(BTreeMap<Category, f64>);

impl UsageTally {
    pub fn new() -> Self {
        UsageTally(Category::ALL.into_iter().map(|c| (c, 0.0)).collect())
    }

    pub fn get(&self, category: Category) -> f64 {
        self.0.get(&category).copied().unwrap_or(0.0)
    }

    pub(crate) fn add(&mut self, category: Category, amount: f64) {
        *self.0.entry(category).or_insert(0.0) += amount;
    }

    /// Entries in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        self.0.iter().map(|(c, v)| (*c, *v))
    }

    /// True when every category is exactly zero.
    pub fn is_empty(&self) -> bool {
        self.0.values().all(|v| *v == 0.0)
    }

    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }
}

impl Default for UsageTally {
    fn default() -> Self {
        Self::new()
    }
}

/// Emission (or absorption, when negative) per category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmissionResult(BTreeMap<Category, f64>);

impl EmissionResult {
    pub(crate) fn from_entries(entries: impl IntoIterator<Item = (Category, f64)>) -> Self {
        EmissionResult(entries.into_iter().collect())
    }

    pub fn get(&self, category: Category) -> f64 {
        self.0.get(&category).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        self.0.iter().map(|(c, v)| (*c, *v))
    }

    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }
}

/// One row of the dashboard: a category with its usage and emission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryOutcome {
    pub category: Category,
    pub name: String,
    pub usage: f64,
    pub emission: f64,
    pub unit_label: String,
    pub gas_label: String,
    /// Lines whose numbers were added to this category.
    pub matched_lines: usize,
}

impl CategoryOutcome {
    pub fn has_data(&self) -> bool {
        self.usage > 0.0 || self.emission != 0.0
    }
}

/// Numeric arrays for a usage-vs-emission chart, in registry order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSeries {
    pub categories: Vec<String>,
    pub usage: Vec<f64>,
    pub emission: Vec<f64>,
}

/// Result of running the multi-category aggregator over one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResult {
    pub usage: UsageTally,
    pub emissions: EmissionResult,
    /// Set when every category's usage is exactly zero.
    pub no_match: bool,
    pub trace: TraceBundle,
}

impl DashboardResult {
    pub fn has_matches(&self) -> bool {
        !self.no_match
    }

    pub fn outcomes(&self) -> Vec<CategoryOutcome> {
        registry::categories()
            .iter()
            .map(|entry| CategoryOutcome {
                category: entry.category,
                name: entry.name().to_string(),
                usage: self.usage.get(entry.category),
                emission: self.emissions.get(entry.category),
                unit_label: entry.unit_label.to_string(),
                gas_label: entry.gas_label.to_string(),
                matched_lines: self
                    .trace
                    .lines
                    .iter()
                    .filter(|l| l.category == entry.category && l.contributed())
                    .count(),
            })
            .collect()
    }

    pub fn total_usage(&self) -> f64 {
        self.usage.total()
    }

    pub fn total_emission(&self) -> f64 {
        self.emissions.total()
    }

    pub fn chart_series(&self) -> ChartSeries {
        ChartSeries {
            categories: Category::ALL.iter().map(|c| c.name().to_string()).collect(),
            usage: Category::ALL.iter().map(|c| self.usage.get(*c)).collect(),
            emission: Category::ALL.iter().map(|c| self.emissions.get(*c)).collect(),
        }
    }
}

/// Output of the single-category estimator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub total_units: f64,
    pub emission: f64,
}

/// Estimate produced by a named estimator definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateResult {
    pub estimator: String,
    pub title: String,
    pub unit_label: String,
    pub gas_label: String,
    /// `None` when none of the estimator's keywords occur in the document.
    pub estimate: Option<Estimate>,
}

impl EstimateResult {
    pub fn is_applicable(&self) -> bool {
        self.estimate.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tally_is_zeroed_for_all_categories() {
        let tally = UsageTally::new();
        assert_eq!(tally.iter().count(), Category::COUNT);
        assert!(tally.is_empty());
        assert_eq!(tally.total(), 0.0);
    }

    #[test]
    fn test_tally_iterates_in_registry_order() {
        let order: Vec<Category> = UsageTally::new().iter().map(|(c, _)| c).collect();
        assert_eq!(order, Category::ALL.to_vec());
    }

    #[test]
    fn test_tally_serializes_as_named_map() {
        let mut tally = UsageTally::new();
        tally.add(Category::WaterUsage, 12.5);
        let json = serde_json::to_value(&tally).unwrap();
        assert_eq!(json["water_usage"], 12.5);
        assert_eq!(json["carbon"], 0.0);
    }
}
