use crate::error::{FluidError, FluidResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pumped fluids recognized by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FluidId {
    Water,
    Seawater,
    Wastewater,
    Ethanol,
    Methanol,
    Glycerol,
    EthyleneGlycol,
    PropyleneGlycol,
    Diesel,
    Gasoline,
    Kerosene,
    HydraulicOil,
    PalmOil,
    OliveOil,
    Milk,
    Wine,
    Honey,
    Acid,
    SodiumHydroxide,
    Bleach,
}

/// Behavioural classes used by the compatibility matrix and the advisors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FluidClass {
    Aqueous,
    Corrosive,
    Flammable,
    Hydrocarbon,
    Food,
    Viscous,
    /// Carries solids that settle at low velocity.
    Settling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FluidCatalogEntry {
    pub fluid: FluidId,
    pub canonical_id: &'static str,
    pub display_name: &'static str,
    pub aliases: &'static [&'static str],
    pub classes: &'static [FluidClass],
}

impl FluidCatalogEntry {
    pub fn matches_id(&self, query: &str) -> bool {
        let query = query.trim();
        self.canonical_id.eq_ignore_ascii_case(query)
            || self
                .aliases
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(query))
    }
}

// Row order follows the `FluidId` declaration order.
static FLUID_CATALOG: [FluidCatalogEntry; 20] = [
    FluidCatalogEntry {
        fluid: FluidId::Water,
        canonical_id: "water",
        display_name: "Water",
        aliases: &["eau", "h2o", "fresh_water"],
        classes: &[FluidClass::Aqueous],
    },
    FluidCatalogEntry {
        fluid: FluidId::Seawater,
        canonical_id: "seawater",
        display_name: "Seawater",
        aliases: &["sea_water", "brine"],
        classes: &[FluidClass::Aqueous, FluidClass::Corrosive],
    },
    FluidCatalogEntry {
        fluid: FluidId::Wastewater,
        canonical_id: "wastewater",
        display_name: "Wastewater",
        aliases: &["waste_water", "sewage"],
        classes: &[FluidClass::Aqueous, FluidClass::Settling],
    },
    FluidCatalogEntry {
        fluid: FluidId::Ethanol,
        canonical_id: "ethanol",
        display_name: "Ethanol",
        aliases: &["ethyl_alcohol"],
        classes: &[FluidClass::Flammable],
    },
    FluidCatalogEntry {
        fluid: FluidId::Methanol,
        canonical_id: "methanol",
        display_name: "Methanol",
        aliases: &["methyl_alcohol"],
        classes: &[FluidClass::Flammable],
    },
    FluidCatalogEntry {
        fluid: FluidId::Glycerol,
        canonical_id: "glycerol",
        display_name: "Glycerol",
        aliases: &["glycerin", "glycerine"],
        classes: &[FluidClass::Viscous, FluidClass::Food],
    },
    FluidCatalogEntry {
        fluid: FluidId::EthyleneGlycol,
        canonical_id: "ethylene_glycol",
        display_name: "Ethylene glycol (50 %)",
        aliases: &["glycol"],
        classes: &[FluidClass::Aqueous],
    },
    FluidCatalogEntry {
        fluid: FluidId::PropyleneGlycol,
        canonical_id: "propylene_glycol",
        display_name: "Propylene glycol (50 %)",
        aliases: &[],
        classes: &[FluidClass::Aqueous, FluidClass::Food],
    },
    FluidCatalogEntry {
        fluid: FluidId::Diesel,
        canonical_id: "diesel",
        display_name: "Diesel fuel",
        aliases: &["gasoil", "gas_oil"],
        classes: &[FluidClass::Flammable, FluidClass::Hydrocarbon],
    },
    FluidCatalogEntry {
        fluid: FluidId::Gasoline,
        canonical_id: "gasoline",
        display_name: "Gasoline",
        aliases: &["petrol", "essence"],
        classes: &[FluidClass::Flammable, FluidClass::Hydrocarbon],
    },
    FluidCatalogEntry {
        fluid: FluidId::Kerosene,
        canonical_id: "kerosene",
        display_name: "Kerosene",
        aliases: &["jet_fuel"],
        classes: &[FluidClass::Flammable, FluidClass::Hydrocarbon],
    },
    FluidCatalogEntry {
        fluid: FluidId::HydraulicOil,
        canonical_id: "hydraulic_oil",
        display_name: "Hydraulic oil (ISO VG 46)",
        aliases: &["oil"],
        classes: &[FluidClass::Hydrocarbon, FluidClass::Viscous],
    },
    FluidCatalogEntry {
        fluid: FluidId::PalmOil,
        canonical_id: "palm_oil",
        display_name: "Palm oil",
        aliases: &[],
        classes: &[FluidClass::Food, FluidClass::Viscous],
    },
    FluidCatalogEntry {
        fluid: FluidId::OliveOil,
        canonical_id: "olive_oil",
        display_name: "Olive oil",
        aliases: &[],
        classes: &[FluidClass::Food, FluidClass::Viscous],
    },
    FluidCatalogEntry {
        fluid: FluidId::Milk,
        canonical_id: "milk",
        display_name: "Milk",
        aliases: &[],
        classes: &[FluidClass::Aqueous, FluidClass::Food],
    },
    FluidCatalogEntry {
        fluid: FluidId::Wine,
        canonical_id: "wine",
        display_name: "Wine",
        aliases: &[],
        classes: &[FluidClass::Aqueous, FluidClass::Food],
    },
    FluidCatalogEntry {
        fluid: FluidId::Honey,
        canonical_id: "honey",
        display_name: "Honey",
        aliases: &[],
        classes: &[FluidClass::Food, FluidClass::Viscous],
    },
    FluidCatalogEntry {
        fluid: FluidId::Acid,
        canonical_id: "acid",
        display_name: "Sulfuric acid solution (10 %)",
        aliases: &["sulfuric_acid", "sulphuric_acid"],
        classes: &[FluidClass::Aqueous, FluidClass::Corrosive],
    },
    FluidCatalogEntry {
        fluid: FluidId::SodiumHydroxide,
        canonical_id: "sodium_hydroxide",
        display_name: "Sodium hydroxide solution (20 %)",
        aliases: &["caustic_soda", "naoh"],
        classes: &[FluidClass::Aqueous, FluidClass::Corrosive],
    },
    FluidCatalogEntry {
        fluid: FluidId::Bleach,
        canonical_id: "bleach",
        display_name: "Sodium hypochlorite (12 %)",
        aliases: &["sodium_hypochlorite"],
        classes: &[FluidClass::Aqueous, FluidClass::Corrosive],
    },
];

pub fn fluid_catalog() -> &'static [FluidCatalogEntry] {
    &FLUID_CATALOG
}

pub fn find_fluid(query: &str) -> FluidResult<&'static FluidCatalogEntry> {
    fluid_catalog()
        .iter()
        .find(|entry| entry.matches_id(query))
        .ok_or_else(|| FluidError::UnknownFluid {
            id: query.to_string(),
        })
}

impl FluidId {
    pub fn entry(self) -> &'static FluidCatalogEntry {
        &FLUID_CATALOG[self as usize]
    }

    pub fn as_str(self) -> &'static str {
        self.entry().canonical_id
    }

    pub fn display_name(self) -> &'static str {
        self.entry().display_name
    }

    pub fn has_class(self, class: FluidClass) -> bool {
        self.entry().classes.contains(&class)
    }
}

impl FromStr for FluidId {
    type Err = FluidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        find_fluid(s).map(|entry| entry.fluid)
    }
}

impl fmt::Display for FluidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_twenty_fluids() {
        assert_eq!(fluid_catalog().len(), 20);
    }

    #[test]
    fn canonical_ids_are_unique() {
        let mut seen = HashSet::new();
        for entry in fluid_catalog() {
            assert!(
                seen.insert(entry.canonical_id),
                "duplicate canonical id: {}",
                entry.canonical_id
            );
        }
    }

    #[test]
    fn rows_follow_declaration_order() {
        for (i, entry) in fluid_catalog().iter().enumerate() {
            assert_eq!(entry.fluid as usize, i, "{} is out of order", entry.canonical_id);
        }
    }

    #[test]
    fn parse_accepts_aliases_case_insensitively() {
        assert_eq!("WATER".parse::<FluidId>().unwrap(), FluidId::Water);
        assert_eq!("caustic_soda".parse::<FluidId>().unwrap(), FluidId::SodiumHydroxide);
        assert!("mercury".parse::<FluidId>().is_err());
    }

    #[test]
    fn serde_name_matches_canonical_id() {
        for entry in fluid_catalog() {
            let json = serde_json_name(entry.fluid);
            assert_eq!(json, entry.canonical_id);
        }
    }

    fn serde_json_name(fluid: FluidId) -> String {
        // serde's snake_case renaming mirrors the canonical ids.
        let debug = format!("{fluid:?}");
        let mut out = String::new();
        for (i, ch) in debug.chars().enumerate() {
            if ch.is_ascii_uppercase() {
                if i > 0 {
                    out.push('_');
                }
                out.push(ch.to_ascii_lowercase());
            } else {
                out.push(ch);
            }
        }
        out
    }

    #[test]
    fn classes_drive_category_checks() {
        assert!(FluidId::Acid.has_class(FluidClass::Corrosive));
        assert!(FluidId::Gasoline.has_class(FluidClass::Flammable));
        assert!(FluidId::Milk.has_class(FluidClass::Food));
        assert!(!FluidId::Water.has_class(FluidClass::Corrosive));
    }
}
