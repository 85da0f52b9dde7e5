use crate::error::{FluidError, FluidResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pipe materials with tabulated roughness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipeMaterial {
    Pvc,
    Pehd,
    Steel,
    GalvanizedSteel,
    StainlessSteel,
    CastIron,
    DuctileIron,
    Copper,
    Concrete,
    Fiberglass,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialEntry {
    pub material: PipeMaterial,
    pub canonical_id: &'static str,
    pub display_name: &'static str,
    pub aliases: &'static [&'static str],
    /// Absolute roughness (mm)
    pub roughness_mm: f64,
    /// Maximum recommended service temperature (°C)
    pub max_temperature_c: f64,
    /// Approved for contact with foodstuffs
    pub food_grade: bool,
    /// Installed cost relative to PVC
    pub relative_cost: f64,
}

// Row order follows the `PipeMaterial` declaration order.
static MATERIALS: [MaterialEntry; 10] = [
    MaterialEntry {
        material: PipeMaterial::Pvc,
        canonical_id: "pvc",
        display_name: "PVC",
        aliases: &["upvc"],
        roughness_mm: 0.0015,
        max_temperature_c: 60.0,
        food_grade: false,
        relative_cost: 1.0,
    },
    MaterialEntry {
        material: PipeMaterial::Pehd,
        canonical_id: "pehd",
        display_name: "PEHD (HDPE)",
        aliases: &["hdpe", "polyethylene"],
        roughness_mm: 0.007,
        max_temperature_c: 60.0,
        food_grade: true,
        relative_cost: 1.2,
    },
    MaterialEntry {
        material: PipeMaterial::Steel,
        canonical_id: "steel",
        display_name: "Commercial steel",
        aliases: &["carbon_steel", "acier"],
        roughness_mm: 0.045,
        max_temperature_c: 400.0,
        food_grade: false,
        relative_cost: 2.0,
    },
    MaterialEntry {
        material: PipeMaterial::GalvanizedSteel,
        canonical_id: "galvanized_steel",
        display_name: "Galvanized steel",
        aliases: &["galvanized"],
        roughness_mm: 0.15,
        max_temperature_c: 100.0,
        food_grade: false,
        relative_cost: 2.3,
    },
    MaterialEntry {
        material: PipeMaterial::StainlessSteel,
        canonical_id: "stainless_steel",
        display_name: "Stainless steel 316L",
        aliases: &["stainless", "inox"],
        roughness_mm: 0.015,
        max_temperature_c: 400.0,
        food_grade: true,
        relative_cost: 4.5,
    },
    MaterialEntry {
        material: PipeMaterial::CastIron,
        canonical_id: "cast_iron",
        display_name: "Cast iron",
        aliases: &["fonte"],
        roughness_mm: 0.26,
        max_temperature_c: 300.0,
        food_grade: false,
        relative_cost: 2.5,
    },
    MaterialEntry {
        material: PipeMaterial::DuctileIron,
        canonical_id: "ductile_iron",
        display_name: "Ductile iron (cement lined)",
        aliases: &["fonte_ductile"],
        roughness_mm: 0.1,
        max_temperature_c: 300.0,
        food_grade: false,
        relative_cost: 3.0,
    },
    MaterialEntry {
        material: PipeMaterial::Copper,
        canonical_id: "copper",
        display_name: "Copper",
        aliases: &["cuivre"],
        roughness_mm: 0.0015,
        max_temperature_c: 200.0,
        food_grade: false,
        relative_cost: 5.0,
    },
    MaterialEntry {
        material: PipeMaterial::Concrete,
        canonical_id: "concrete",
        display_name: "Concrete",
        aliases: &["beton"],
        roughness_mm: 1.0,
        max_temperature_c: 80.0,
        food_grade: false,
        relative_cost: 1.8,
    },
    MaterialEntry {
        material: PipeMaterial::Fiberglass,
        canonical_id: "fiberglass",
        display_name: "Fiberglass (GRP)",
        aliases: &["grp", "frp"],
        roughness_mm: 0.01,
        max_temperature_c: 100.0,
        food_grade: false,
        relative_cost: 2.8,
    },
];

pub fn material_catalog() -> &'static [MaterialEntry] {
    &MATERIALS
}

pub fn find_material(query: &str) -> FluidResult<&'static MaterialEntry> {
    let query = query.trim();
    MATERIALS
        .iter()
        .find(|m| {
            m.canonical_id.eq_ignore_ascii_case(query)
                || m.aliases.iter().any(|a| a.eq_ignore_ascii_case(query))
        })
        .ok_or_else(|| FluidError::UnknownMaterial {
            id: query.to_string(),
        })
}

impl PipeMaterial {
    pub fn entry(self) -> &'static MaterialEntry {
        &MATERIALS[self as usize]
    }

    pub fn as_str(self) -> &'static str {
        self.entry().canonical_id
    }

    /// Absolute roughness in metres.
    pub fn roughness_m(self) -> f64 {
        self.entry().roughness_mm / 1000.0
    }

    pub fn max_temperature_c(self) -> f64 {
        self.entry().max_temperature_c
    }

    pub fn is_food_grade(self) -> bool {
        self.entry().food_grade
    }
}

impl FromStr for PipeMaterial {
    type Err = FluidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        find_material(s).map(|entry| entry.material)
    }
}

impl fmt::Display for PipeMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.entry().display_name)
    }
}
