use crate::error::GreenGuardError;
use crate::estimators::schema::{EstimatorDef, EstimatorSet};
use std::sync::LazyLock;

const ESTIMATORS_JSON: &str = include_str!("../../../../presets/estimators.json");

static PRESET_SET: LazyLock<EstimatorSet> = LazyLock::new(|| {
    serde_json::from_str(ESTIMATORS_JSON).expect("embedded estimators.json is valid")
});

/// Available predefined estimators.
pub const PRESETS: &[&str] = &[
    "carbon",
    "methane",
    "nitrous-oxide",
    "vapor",
    "water",
    "plant-intake",
];

/// All predefined estimators, in preset order.
pub fn presets() -> &'static [EstimatorDef] {
    &PRESET_SET.estimators
}

/// Load a predefined estimator by name.
pub fn load_preset(name: &str) -> Result<EstimatorDef, GreenGuardError> {
    let key = name.trim().to_lowercase().replace('_', "-");
    presets()
        .iter()
        .find(|def| def.name == key)
        .cloned()
        .ok_or_else(|| {
            GreenGuardError::EstimatorInvalid(format!(
                "unknown preset '{}'. Available: {}",
                name,
                PRESETS.join(", ")
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimators::validate_estimator;

    #[test]
    fn test_presets_match_embedded_set() {
        let names: Vec<&str> = presets().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, PRESETS);
    }

    #[test]
    fn test_embedded_presets_are_valid() {
        for def in presets() {
            validate_estimator(def).unwrap();
        }
    }

    #[test]
    fn test_load_carbon_preset() {
        let def = load_preset("carbon").unwrap();
        assert_eq!(def.factor, 0.82);
        assert_eq!(def.precision, 4);
        assert!(def.keywords.contains(&"kwh".to_string()));
    }

    #[test]
    fn test_plant_intake_is_absorption() {
        let def = load_preset("plant_intake").unwrap();
        assert!(def.factor < 0.0);
        assert_eq!(def.precision, 2);
    }

    #[test]
    fn test_unknown_preset() {
        assert!(load_preset("ozone").is_err());
    }
}
