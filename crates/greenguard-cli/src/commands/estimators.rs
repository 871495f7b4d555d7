use greenguard_core::error::GreenGuardError;
use greenguard_core::estimators::builtin;
use greenguard_core::estimators::schema::default_precision;
use std::collections::HashSet;
use std::path::Path;

pub fn list() -> Result<(), GreenGuardError> {
    println!("Available predefined estimators:\n");
    for def in builtin::presets() {
        println!(
            "  {:<14} {} (factor {}, {} -> {})",
            def.name, def.title, def.factor, def.unit_label, def.gas_label
        );
        if let Some(ref desc) = def.description {
            println!("                 {}", desc);
        }
        println!("                 Keywords: {}", def.keywords.join(", "));
        println!();
    }
    Ok(())
}

pub fn schema() -> Result<(), GreenGuardError> {
    print!(
        r#"JSON Estimator Schema
=====================

An estimator file defines a single-category emission estimate. When you
run `greenguard estimate --estimator FILE`, the document is checked for
any of the keywords; if one is present, every number in the document is
summed and multiplied by the factor.

Fields:
  name            (string, required)  Short identifier, e.g. "lpg"
  title           (string, required)  Report title, e.g. "LPG Emission Report"
  description     (string, optional)  What documents this is meant for
  keywords        (array, required)   Trigger phrases, matched
                                      case-insensitively anywhere in the text.
                                      At least one, none blank.
  factor          (number, required)  Emission per unit. Use a negative
                                      factor for absorption.
  precision       (integer, optional) Decimal places kept on the emission,
                                      0 to 10. Default: {precision}
  unit_label      (string, optional)  Default: "units"
  gas_label       (string, optional)  Default: "kg CO2"
  not_applicable  (string, optional)  Message shown when no keyword matches.

Example:
{{
  "name": "lpg",
  "title": "LPG Emission Report",
  "description": "LPG cylinder refill receipts",
  "keywords": ["lpg", "cylinder", "cooking gas"],
  "factor": 2.98,
  "precision": 2,
  "unit_label": "kg",
  "gas_label": "kg CO2",
  "not_applicable": "This receipt does not appear to contain LPG purchases."
}}

Note: numbers are taken from the whole document, not only from lines
near a keyword. Use `greenguard total` for per-line attribution.
"#,
        precision = default_precision()
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), GreenGuardError> {
    let def = greenguard_core::estimators::load_estimator(file)?;

    println!("Estimator '{}' is valid.", def.name);
    println!("  Title: {}", def.title);
    println!("  Keywords: {}", def.keywords.join(", "));
    println!(
        "  Emission = round(units x {}, {}) {}",
        def.factor, def.precision, def.gas_label
    );

    // Potential issues (warnings, not errors)
    let mut warnings = Vec::new();
    let mut seen = HashSet::new();
    for kw in &def.keywords {
        if !seen.insert(kw.trim().to_lowercase()) {
            warnings.push(format!("keyword '{}' is listed more than once", kw));
        }
    }
    if def.factor == 0.0 {
        warnings.push("factor is 0; every estimate will be 0".to_string());
    }
    if builtin::PRESETS.contains(&def.name.as_str()) {
        warnings.push(format!(
            "name '{}' shadows a predefined estimator",
            def.name
        ));
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
