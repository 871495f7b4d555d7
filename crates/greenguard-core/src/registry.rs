use crate::error::GreenGuardError;
use crate::model::Category;
use serde::Serialize;

/// Static description of one emission category.
#[derive(Debug, Clone, Serialize)]
pub struct EmissionCategory {
    pub category: Category,
    /// Lowercase trigger phrases, matched as substrings.
    pub keywords: &'static [&'static str],
    /// Usage units to emission units. Negative for absorption.
    pub factor: f64,
    pub unit_label: &'static str,
    pub gas_label: &'static str,
    /// Absorption categories keep negative emissions as-is.
    pub absorbs: bool,
}

impl EmissionCategory {
    pub fn name(&self) -> &'static str {
        self.category.name()
    }
}

static CATEGORIES: [EmissionCategory; Category::COUNT] = [
    EmissionCategory {
        category: Category::Carbon,
        keywords: &[
            "electricity",
            "power",
            "kwh",
            "energy",
            "consumption",
            "meter",
            "total units",
            "tariff",
            "reading",
            "supply",
            "unit price",
            "rate",
            "amount",
            "charge",
            "billing period",
            "account no",
            "bill no",
            "meter no",
        ],
        factor: 0.82,
        unit_label: "kWh",
        gas_label: "kg CO2",
        absorbs: false,
    },
    EmissionCategory {
        category: Category::Methane,
        keywords: &[
            "biogas",
            "manure",
            "livestock",
            "digestor",
            "slurry",
            "methane",
            "animal",
            "dung",
            "biogas produced",
            "gas volume",
            "gas yield",
        ],
        factor: 0.0009,
        unit_label: "kg",
        gas_label: "kg CH4",
        absorbs: false,
    },
    EmissionCategory {
        category: Category::NitrousOxide,
        keywords: &[
            "fertilizer",
            "n2o",
            "nitrous",
            "urea",
            "ammonium",
            "application",
            "soil",
            "dap",
            "no3",
            "nh4",
            "nitrogen",
            "fertilizer kg",
            "manure nitrogen",
        ],
        factor: 0.0056,
        unit_label: "kg",
        gas_label: "kg N2O eq",
        absorbs: false,
    },
    EmissionCategory {
        category: Category::WaterUsage,
        keywords: &[
            "water",
            "litre",
            "liter",
            "litres",
            "kl",
            "kilolitre",
            "flow",
            "tank",
            "meter reading",
            "irrigation",
            "consumption",
            "pump",
            "meter",
        ],
        factor: 0.0003,
        unit_label: "litres",
        gas_label: "kg CO2 eq",
        absorbs: false,
    },
    EmissionCategory {
        category: Category::Vapor,
        keywords: &[
            "vapor",
            "vapour",
            "evaporation",
            "steam",
            "condensate",
            "boiler",
            "evaporator",
            "tonnes of steam",
            "steam trap",
            "flue",
            "condensation",
            "latent heat",
        ],
        factor: 0.007,
        unit_label: "m3",
        gas_label: "kg CO2",
        absorbs: false,
    },
    EmissionCategory {
        category: Category::PlantIntake,
        keywords: &[
            "tree",
            "sapling",
            "planted",
            "plantation",
            "afforestation",
            "reforestation",
            "trees planted",
        ],
        // kg CO2 absorbed per tree
        factor: -21.77,
        unit_label: "trees",
        gas_label: "kg CO2 (absorbed)",
        absorbs: true,
    },
    EmissionCategory {
        category: Category::FuelEmission,
        keywords: &[
            "diesel",
            "petrol",
            "fuel",
            "volume",
            "litres",
            "liter",
            "ltrs",
            "qty",
            "quantity",
            "density",
            "unit price",
            "rate",
            "amount",
            "receipt",
            "nozzle",
            "tank",
            "pump",
            "bunk",
        ],
        // kg CO2 per litre of diesel
        factor: 2.68,
        unit_label: "litres",
        gas_label: "kg CO2",
        absorbs: false,
    },
];

/// All categories in registry order.
pub fn categories() -> &'static [EmissionCategory; Category::COUNT] {
    &CATEGORIES
}

pub fn category(c: Category) -> &'static EmissionCategory {
    &CATEGORIES[c.index()]
}

/// Look up a category by any name accepted by [`Category::from_str_loose`].
pub fn lookup(name: &str) -> Result<&'static EmissionCategory, GreenGuardError> {
    Category::from_str_loose(name)
        .map(category)
        .ok_or_else(|| GreenGuardError::UnknownCategory(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_matches_enum() {
        for (i, entry) in categories().iter().enumerate() {
            assert_eq!(entry.category.index(), i);
        }
    }

    #[test]
    fn test_keywords_are_lowercase_and_non_empty() {
        for entry in categories() {
            assert!(!entry.keywords.is_empty(), "{} has no keywords", entry.name());
            for kw in entry.keywords {
                assert_eq!(*kw, kw.to_lowercase());
                assert!(!kw.trim().is_empty());
            }
        }
    }

    #[test]
    fn test_only_plant_intake_absorbs() {
        let absorbing: Vec<Category> = categories()
            .iter()
            .filter(|c| c.absorbs)
            .map(|c| c.category)
            .collect();
        assert_eq!(absorbing, vec![Category::PlantIntake]);
        assert!(category(Category::PlantIntake).factor < 0.0);
    }

    #[test]
    fn test_lookup_unknown() {
        assert!(lookup("carbon").is_ok());
        assert!(matches!(
            lookup("ozone"),
            Err(GreenGuardError::UnknownCategory(_))
        ));
    }
}
