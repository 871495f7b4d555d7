pub mod builtin;
pub mod schema;

use crate::error::GreenGuardError;
use schema::EstimatorDef;
use std::path::Path;

/// Highest precision accepted for an estimator.
pub const MAX_PRECISION: u32 = 10;

/// Load an estimator definition from a JSON file.
pub fn load_estimator(path: &Path) -> Result<EstimatorDef, GreenGuardError> {
    let content = std::fs::read_to_string(path).map_err(|e| GreenGuardError::EstimatorLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_estimator(&content, path)
}

/// Parse an estimator definition from a JSON string.
pub fn parse_estimator(json: &str, source: &Path) -> Result<EstimatorDef, GreenGuardError> {
    let def: EstimatorDef =
        serde_json::from_str(json).map_err(|e| GreenGuardError::EstimatorLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_estimator(&def)?;
    Ok(def)
}

/// Parse an estimator definition from a JSON string (no file path context).
pub fn parse_estimator_str(json: &str) -> Result<EstimatorDef, GreenGuardError> {
    let def: EstimatorDef = serde_json::from_str(json).map_err(GreenGuardError::Json)?;
    validate_estimator(&def)?;
    Ok(def)
}

/// Validate that an estimator definition is well-formed.
pub fn validate_estimator(def: &EstimatorDef) -> Result<(), GreenGuardError> {
    if def.name.trim().is_empty() {
        return Err(GreenGuardError::EstimatorInvalid(
            "name must not be empty".into(),
        ));
    }

    if def.keywords.is_empty() {
        return Err(GreenGuardError::EstimatorInvalid(format!(
            "estimator '{}' has no keywords",
            def.name
        )));
    }

    if def.keywords.iter().any(|kw| kw.trim().is_empty()) {
        return Err(GreenGuardError::EstimatorInvalid(format!(
            "estimator '{}' has a blank keyword",
            def.name
        )));
    }

    if !def.factor.is_finite() {
        return Err(GreenGuardError::EstimatorInvalid(format!(
            "estimator '{}' has a non-finite factor",
            def.name
        )));
    }

    if def.precision > MAX_PRECISION {
        return Err(GreenGuardError::EstimatorInvalid(format!(
            "estimator '{}' precision {} exceeds {}",
            def.name, def.precision, MAX_PRECISION
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_valid_estimator() {
        let json = r#"{
            "name": "boiler",
            "title": "Boiler Report",
            "keywords": ["boiler", "steam"],
            "factor": 0.007
        }"#;
        let def = parse_estimator_str(json).unwrap();
        assert_eq!(def.name, "boiler");
        assert_eq!(def.precision, 4);
        assert_eq!(def.unit_label, "units");
    }

    #[test]
    fn test_empty_keywords_rejected() {
        let json = r#"{ "name": "x", "title": "X", "keywords": [], "factor": 1.0 }"#;
        assert!(matches!(
            parse_estimator_str(json),
            Err(GreenGuardError::EstimatorInvalid(_))
        ));
    }

    #[test]
    fn test_blank_keyword_rejected() {
        let json = r#"{ "name": "x", "title": "X", "keywords": ["ok", "  "], "factor": 1.0 }"#;
        assert!(parse_estimator_str(json).is_err());
    }

    #[test]
    fn test_precision_limit() {
        let json =
            r#"{ "name": "x", "title": "X", "keywords": ["a"], "factor": 1.0, "precision": 11 }"#;
        assert!(parse_estimator_str(json).is_err());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let json = r#"{ "name": "x", "title": "X", "keywords": ["a"], "factor": 1.0, "scale": 2 }"#;
        assert!(parse_estimator_str(json).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "name": "lpg", "title": "LPG Report", "keywords": ["lpg"], "factor": 2.98 }}"#
        )
        .unwrap();
        let def = load_estimator(file.path()).unwrap();
        assert_eq!(def.name, "lpg");
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = load_estimator(Path::new("/nonexistent/estimator.json")).unwrap_err();
        assert!(matches!(err, GreenGuardError::EstimatorLoad { .. }));
        assert!(err.to_string().contains("/nonexistent/estimator.json"));
    }
}
