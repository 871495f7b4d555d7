use crate::classify::outcome::{Estimate, EstimateResult};
use crate::estimators::schema::{default_precision, EstimatorDef};
use crate::parsing::{contains_any_keyword, parse_numbers, round_to};
use tracing::info;

/// Single-category estimate over a whole document.
///
/// Returns `None` when no keyword occurs anywhere in the text. Otherwise
/// every number in the document is summed, not only those near a keyword.
pub fn estimate<S: AsRef<str>>(document_text: &str, keywords: &[S], factor: f64) -> Option<Estimate> {
    estimate_with_precision(document_text, keywords, factor, default_precision())
}

pub fn estimate_with_precision<S: AsRef<str>>(
    document_text: &str,
    keywords: &[S],
    factor: f64,
    precision: u32,
) -> Option<Estimate> {
    if !contains_any_keyword(document_text, keywords) {
        return None;
    }

    let total_units: f64 = parse_numbers(document_text).iter().sum();
    Some(Estimate {
        total_units,
        emission: round_to(total_units * factor, precision),
    })
}

/// Run a named estimator definition against a document.
pub fn run_estimator(document_text: &str, def: &EstimatorDef) -> EstimateResult {
    let estimate =
        estimate_with_precision(document_text, def.keywords.as_slice(), def.factor, def.precision);

    match &estimate {
        Some(e) => info!(
            estimator = %def.name,
            total_units = e.total_units,
            emission = e.emission,
            "estimate computed"
        ),
        None => info!(estimator = %def.name, "no estimator keyword present"),
    }

    EstimateResult {
        estimator: def.name.clone(),
        title: def.title.clone(),
        unit_label: def.unit_label.clone(),
        gas_label: def.gas_label.clone(),
        estimate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimators::builtin::load_preset;

    #[test]
    fn test_plant_intake_absorption() {
        let def = load_preset("plant-intake").unwrap();
        let result = run_estimator("Trees planted: 50", &def);
        let e = result.estimate.unwrap();
        assert_eq!(e.total_units, 50.0);
        assert_eq!(e.emission, -1088.5);
    }

    #[test]
    fn test_not_applicable_without_keywords() {
        assert_eq!(estimate("Grocery receipt 12.50", &["electricity"], 0.82), None);
    }

    #[test]
    fn test_sums_every_number_in_document() {
        // Numbers far from any keyword still count.
        let text = "Account 7\nElectricity used: 100 kWh\nPage 1 of 2";
        let e = estimate(text, &["electricity"], 0.82).unwrap();
        assert_eq!(e.total_units, 110.0);
        assert_eq!(e.emission, 90.2);
    }

    #[test]
    fn test_keyword_without_numbers() {
        let e = estimate("steam", &["steam"], 0.0004).unwrap();
        assert_eq!(e.total_units, 0.0);
        assert_eq!(e.emission, 0.0);
    }

    #[test]
    fn test_four_decimal_rounding() {
        let e = estimate("water 1234", &["water"], 0.0003).unwrap();
        assert_eq!(e.emission, 0.3702);
    }

    #[test]
    fn test_four_decimal_rounding_below_midpoint() {
        // 0.5 * 0.0003 is stored just under 0.00015.
        let water = load_preset("water").unwrap();
        let e = run_estimator("water 0.5", &water).estimate.unwrap();
        assert_eq!(e.emission, 0.0001);
    }

    #[test]
    fn test_empty_text() {
        assert!(estimate("", &["water"], 0.0003).is_none());
    }
}
