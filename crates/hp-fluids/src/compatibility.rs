//! Fluid / pipe-material compatibility matrix.
//!
//! Rules are checked in order: fluid-specific rows first, then class rows, then the
//! food-grade requirement. A pairing no rule covers is reported as `Unrated`.
//! Substitutes the matrix itself rates incompatible with the fluid are dropped.

use crate::catalog::{FluidClass, FluidId};
use crate::materials::PipeMaterial;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompatibilityLevel {
    Compatible,
    Caution,
    Incompatible,
    Unrated,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Compatibility {
    pub fluid: FluidId,
    pub material: PipeMaterial,
    pub level: CompatibilityLevel,
    pub reason: &'static str,
    pub substitutes: Vec<PipeMaterial>,
}

/// Matrix row for one pairing, before substitutes are screened.
#[derive(Debug, Clone, Copy)]
struct Rating {
    level: CompatibilityLevel,
    reason: &'static str,
    substitutes: &'static [PipeMaterial],
}

#[derive(Debug, Clone, Copy)]
enum Subject {
    Fluid(FluidId),
    Class(FluidClass),
}

#[derive(Debug, Clone, Copy)]
struct Rule {
    subject: Subject,
    material: PipeMaterial,
    level: CompatibilityLevel,
    reason: &'static str,
    substitutes: &'static [PipeMaterial],
}

const fn fluid_rule(
    fluid: FluidId,
    material: PipeMaterial,
    level: CompatibilityLevel,
    reason: &'static str,
    substitutes: &'static [PipeMaterial],
) -> Rule {
    Rule {
        subject: Subject::Fluid(fluid),
        material,
        level,
        reason,
        substitutes,
    }
}

const fn class_rule(
    class: FluidClass,
    material: PipeMaterial,
    level: CompatibilityLevel,
    reason: &'static str,
    substitutes: &'static [PipeMaterial],
) -> Rule {
    Rule {
        subject: Subject::Class(class),
        material,
        level,
        reason,
        substitutes,
    }
}

use CompatibilityLevel::{Caution, Compatible, Incompatible};
use PipeMaterial::*;

const CORROSION_SUBSTITUTES: &[PipeMaterial] = &[StainlessSteel, Pehd, Pvc];
const CHLORIDE_SUBSTITUTES: &[PipeMaterial] = &[Pehd, Pvc, Fiberglass];
const FUEL_SUBSTITUTES: &[PipeMaterial] = &[Steel, StainlessSteel];
const HYGIENIC_SUBSTITUTES: &[PipeMaterial] = &[StainlessSteel, Pehd];

static FLUID_RULES: &[Rule] = &[
    fluid_rule(
        FluidId::Bleach,
        StainlessSteel,
        Incompatible,
        "hypochlorite causes pitting corrosion of stainless steel",
        &[Pvc, Pehd],
    ),
    fluid_rule(
        FluidId::Seawater,
        StainlessSteel,
        Caution,
        "chlorides cause pitting of 316L; prefer duplex grades or plastics",
        CHLORIDE_SUBSTITUTES,
    ),
    fluid_rule(
        FluidId::Acid,
        StainlessSteel,
        Caution,
        "dilute sulfuric acid attacks 316L above 40 °C",
        &[Pvc, Pehd],
    ),
    fluid_rule(
        FluidId::Acid,
        Pvc,
        Compatible,
        "PVC has excellent resistance to dilute mineral acids",
        &[],
    ),
    fluid_rule(
        FluidId::SodiumHydroxide,
        Fiberglass,
        Incompatible,
        "alkaline solutions attack glass fibres",
        &[Pehd, StainlessSteel],
    ),
    fluid_rule(
        FluidId::SodiumHydroxide,
        Pehd,
        Compatible,
        "polyethylene resists strong bases",
        &[],
    ),
    fluid_rule(
        FluidId::Wastewater,
        Copper,
        Caution,
        "sulfides in wastewater corrode copper",
        &[Pehd, Pvc, DuctileIron],
    ),
    fluid_rule(
        FluidId::Water,
        Pvc,
        Compatible,
        "standard material for cold water supply",
        &[],
    ),
    fluid_rule(
        FluidId::Water,
        Pehd,
        Compatible,
        "standard material for water distribution",
        &[],
    ),
];

static CLASS_RULES: &[Rule] = &[
    class_rule(
        FluidClass::Corrosive,
        CastIron,
        Incompatible,
        "corrosion: cast iron is attacked by corrosive fluids",
        CORROSION_SUBSTITUTES,
    ),
    class_rule(
        FluidClass::Corrosive,
        Steel,
        Incompatible,
        "corrosion: carbon steel is attacked by corrosive fluids",
        CORROSION_SUBSTITUTES,
    ),
    class_rule(
        FluidClass::Corrosive,
        GalvanizedSteel,
        Incompatible,
        "corrosion: zinc coating dissolves in corrosive fluids",
        CORROSION_SUBSTITUTES,
    ),
    class_rule(
        FluidClass::Corrosive,
        DuctileIron,
        Incompatible,
        "corrosion: cement lining and iron are attacked by corrosive fluids",
        CORROSION_SUBSTITUTES,
    ),
    class_rule(
        FluidClass::Corrosive,
        Copper,
        Incompatible,
        "corrosion: copper dissolves in corrosive fluids",
        CORROSION_SUBSTITUTES,
    ),
    class_rule(
        FluidClass::Corrosive,
        Concrete,
        Incompatible,
        "corrosion: concrete is degraded by acids, bases and chlorides",
        CORROSION_SUBSTITUTES,
    ),
    class_rule(
        FluidClass::Flammable,
        Pvc,
        Incompatible,
        "permeability and static build-up: plastics are not allowed for flammable liquids",
        FUEL_SUBSTITUTES,
    ),
    class_rule(
        FluidClass::Flammable,
        Pehd,
        Incompatible,
        "permeability and static build-up: plastics are not allowed for flammable liquids",
        FUEL_SUBSTITUTES,
    ),
    class_rule(
        FluidClass::Flammable,
        Fiberglass,
        Caution,
        "requires conductive resin and earthing for flammable liquids",
        FUEL_SUBSTITUTES,
    ),
    class_rule(
        FluidClass::Hydrocarbon,
        Concrete,
        Caution,
        "hydrocarbons permeate unlined concrete",
        FUEL_SUBSTITUTES,
    ),
    class_rule(
        FluidClass::Hydrocarbon,
        Steel,
        Compatible,
        "carbon steel is the reference material for hydrocarbons",
        &[],
    ),
];

/// Look up the compatibility of `fluid` with `material`.
pub fn compatibility(fluid: FluidId, material: PipeMaterial) -> Compatibility {
    let rating = rate(fluid, material);
    let substitutes = rating
        .substitutes
        .iter()
        .copied()
        .filter(|&s| s != material && rate(fluid, s).level != Incompatible)
        .collect();

    Compatibility {
        fluid,
        material,
        level: rating.level,
        reason: rating.reason,
        substitutes,
    }
}

fn rate(fluid: FluidId, material: PipeMaterial) -> Rating {
    let found = |rule: &Rule| -> bool {
        rule.material == material
            && match rule.subject {
                Subject::Fluid(f) => f == fluid,
                Subject::Class(c) => fluid.has_class(c),
            }
    };

    let rule = FLUID_RULES
        .iter()
        .find(|r| found(r))
        .or_else(|| {
            // Incompatible class rows outrank compatible ones.
            CLASS_RULES
                .iter()
                .filter(|r| found(r))
                .min_by_key(|r| severity_rank(r.level))
        });

    if let Some(rule) = rule {
        if rule.level != Compatible || !needs_food_grade(fluid, material) {
            return Rating {
                level: rule.level,
                reason: rule.reason,
                substitutes: rule.substitutes,
            };
        }
    }

    if needs_food_grade(fluid, material) {
        return Rating {
            level: Incompatible,
            reason: "hygiene standards: material is not approved for contact with foodstuffs",
            substitutes: HYGIENIC_SUBSTITUTES,
        };
    }

    Rating {
        level: CompatibilityLevel::Unrated,
        reason: "no specific rule for this pairing",
        substitutes: &[],
    }
}

fn needs_food_grade(fluid: FluidId, material: PipeMaterial) -> bool {
    fluid.has_class(FluidClass::Food) && !material.is_food_grade()
}

fn severity_rank(level: CompatibilityLevel) -> u8 {
    match level {
        Incompatible => 0,
        Caution => 1,
        Compatible => 2,
        CompatibilityLevel::Unrated => 3,
    }
}
