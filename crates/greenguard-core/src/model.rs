use serde::{Deserialize, Serialize};
use std::fmt;

/// The seven emission domains, in registry order.
///
/// The discriminant is the ordinal used for tie-breaking in line
/// classification, so variants must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Carbon,
    Methane,
    NitrousOxide,
    WaterUsage,
    Vapor,
    PlantIntake,
    FuelEmission,
}

impl Category {
    pub const COUNT: usize = 7;

    pub const ALL: [Category; Category::COUNT] = [
        Category::Carbon,
        Category::Methane,
        Category::NitrousOxide,
        Category::WaterUsage,
        Category::Vapor,
        Category::PlantIntake,
        Category::FuelEmission,
    ];

    /// Ordinal position in the registry.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display name as shown in reports.
    pub fn name(self) -> &'static str {
        match self {
            Category::Carbon => "Carbon",
            Category::Methane => "Methane",
            Category::NitrousOxide => "Nitrous Oxide",
            Category::WaterUsage => "Water Usage",
            Category::Vapor => "Vapor",
            Category::PlantIntake => "Plant Intake",
            Category::FuelEmission => "Fuel Emission",
        }
    }

    /// Accepts the display name or a snake/kebab-case key, case-insensitively.
    pub fn from_str_loose(s: &str) -> Option<Category> {
        let key: String = s
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == '-' || c == '_' { ' ' } else { c })
            .collect();
        let key = key.split_whitespace().collect::<Vec<_>>().join(" ");

        Category::ALL
            .into_iter()
            .find(|c| c.name().to_lowercase() == key)
            .or(match key.as_str() {
                "co2" => Some(Category::Carbon),
                "ch4" => Some(Category::Methane),
                "n2o" | "nitrous" => Some(Category::NitrousOxide),
                "water" => Some(Category::WaterUsage),
                "vapour" | "steam" => Some(Category::Vapor),
                "plant" | "plants" => Some(Category::PlantIntake),
                "fuel" => Some(Category::FuelEmission),
                _ => None,
            })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
