//! Motor supply sizing: phase, nominal and starting current, starting method and
//! cable cross-section.

use crate::common::check_finite;
use crate::error::{HydraulicError, HydraulicResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    SinglePhase,
    ThreePhase,
}

impl Phase {
    /// Supplies up to `single_phase_max` volts are single-phase.
    pub fn for_voltage(voltage: f64, single_phase_max: f64) -> Self {
        if voltage <= single_phase_max {
            Phase::SinglePhase
        } else {
            Phase::ThreePhase
        }
    }

    fn current_factor(self) -> f64 {
        match self {
            Phase::SinglePhase => 1.0,
            Phase::ThreePhase => 3f64.sqrt(),
        }
    }

    /// Conductor length factor for the voltage-drop formula.
    fn drop_factor(self, power_factor: f64) -> f64 {
        match self {
            Phase::SinglePhase => 2.0,
            Phase::ThreePhase => 3f64.sqrt() * power_factor,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartingMethod {
    #[serde(alias = "dol")]
    DirectOnLine,
    StarDelta,
    SoftStarter,
    #[serde(alias = "variable_frequency_drive")]
    Vfd,
}

impl StartingMethod {
    /// Method recommended for a motor absorbing `power_kw`.
    pub fn recommended_for(power_kw: f64) -> Self {
        if power_kw <= 4.0 {
            StartingMethod::DirectOnLine
        } else if power_kw <= 15.0 {
            StartingMethod::StarDelta
        } else if power_kw <= 75.0 {
            StartingMethod::SoftStarter
        } else {
            StartingMethod::Vfd
        }
    }

    /// Inrush current as a multiple of the nominal current.
    pub fn current_multiplier(self) -> f64 {
        match self {
            StartingMethod::DirectOnLine => 6.0,
            StartingMethod::StarDelta => 2.0,
            StartingMethod::SoftStarter => 3.0,
            StartingMethod::Vfd => 1.2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StartingMethod::DirectOnLine => "direct-on-line",
            StartingMethod::StarDelta => "star-delta",
            StartingMethod::SoftStarter => "soft starter",
            StartingMethod::Vfd => "variable frequency drive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CableMaterial {
    Copper,
    #[serde(alias = "aluminium")]
    Aluminum,
}

impl CableMaterial {
    /// Resistivity at operating temperature (Ω·mm²/m).
    pub fn resistivity(self) -> f64 {
        match self {
            CableMaterial::Copper => 0.0225,
            CableMaterial::Aluminum => 0.036,
        }
    }

    fn ampacity_derating(self) -> f64 {
        match self {
            CableMaterial::Copper => 1.0,
            CableMaterial::Aluminum => 0.78,
        }
    }
}

/// Standard cross-sections (mm²) with copper current capacity (A).
const CABLE_TABLE: [(f64, f64); 16] = [
    (1.5, 18.0),
    (2.5, 25.0),
    (4.0, 34.0),
    (6.0, 43.0),
    (10.0, 60.0),
    (16.0, 80.0),
    (25.0, 101.0),
    (35.0, 126.0),
    (50.0, 153.0),
    (70.0, 196.0),
    (95.0, 238.0),
    (120.0, 276.0),
    (150.0, 319.0),
    (185.0, 364.0),
    (240.0, 430.0),
    (300.0, 497.0),
];

/// Nominal line current (A) drawn for an absorbed power.
pub fn nominal_current(
    absorbed_power_kw: f64,
    voltage: f64,
    power_factor: f64,
    phase: Phase,
) -> HydraulicResult<f64> {
    if !(voltage > 0.0) || !(power_factor > 0.0) {
        return Err(HydraulicError::Domain {
            what: "voltage and power factor must be positive",
        });
    }
    let i = absorbed_power_kw * 1000.0 / (phase.current_factor() * voltage * power_factor);
    check_finite(i, "nominal current")
}

/// Voltage drop (%) over a cable run.
pub fn voltage_drop_percent(
    current: f64,
    length_m: f64,
    section_mm2: f64,
    voltage: f64,
    power_factor: f64,
    phase: Phase,
    material: CableMaterial,
) -> f64 {
    phase.drop_factor(power_factor) * length_m * current * material.resistivity()
        / section_mm2
        / voltage
        * 100.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CableSelection {
    pub section_mm2: f64,
    pub voltage_drop_percent: f64,
    /// No standard section satisfies both criteria; the largest was used.
    pub exceeds_table: bool,
}

/// Smallest standard section meeting both the ampacity and voltage-drop criteria.
pub fn cable_section(
    current: f64,
    length_m: f64,
    voltage: f64,
    power_factor: f64,
    phase: Phase,
    material: CableMaterial,
    max_drop_percent: f64,
) -> CableSelection {
    let derating = material.ampacity_derating();
    let length = length_m.max(0.0);
    let drop = |section: f64| {
        voltage_drop_percent(current, length, section, voltage, power_factor, phase, material)
    };

    let found = CABLE_TABLE
        .iter()
        .find(|(section, ampacity)| ampacity * derating >= current && drop(*section) <= max_drop_percent);

    match found {
        Some(&(section, _)) => CableSelection {
            section_mm2: section,
            voltage_drop_percent: drop(section),
            exceeds_table: false,
        },
        None => {
            let (section, _) = CABLE_TABLE[CABLE_TABLE.len() - 1];
            CableSelection {
                section_mm2: section,
                voltage_drop_percent: drop(section),
                exceeds_table: true,
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ElectricalSizing {
    pub phase: Phase,
    /// A
    pub starting_current: f64,
    pub starting_method: StartingMethod,
    pub recommended_starting_method: StartingMethod,
    /// mm²
    pub cable_section: f64,
    pub cable_material: CableMaterial,
    pub voltage_drop_percent: f64,
    #[serde(skip)]
    pub cable_exceeds_table: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElectricalInput {
    pub absorbed_power_kw: f64,
    pub voltage: f64,
    pub power_factor: f64,
    pub starting_method: StartingMethod,
    pub cable_length_m: f64,
    pub cable_material: CableMaterial,
}

/// Size the supply; returns the nominal current alongside the sizing record.
pub fn size_electrical(
    input: &ElectricalInput,
    single_phase_max_voltage: f64,
    max_drop_percent: f64,
) -> HydraulicResult<(f64, ElectricalSizing)> {
    let phase = Phase::for_voltage(input.voltage, single_phase_max_voltage);
    let current = nominal_current(input.absorbed_power_kw, input.voltage, input.power_factor, phase)?;
    let cable = cable_section(
        current,
        input.cable_length_m,
        input.voltage,
        input.power_factor,
        phase,
        input.cable_material,
        max_drop_percent,
    );

    Ok((
        current,
        ElectricalSizing {
            phase,
            starting_current: check_finite(
                current * input.starting_method.current_multiplier(),
                "starting current",
            )?,
            starting_method: input.starting_method,
            recommended_starting_method: StartingMethod::recommended_for(input.absorbed_power_kw),
            cable_section: cable.section_mm2,
            cable_material: input.cable_material,
            voltage_drop_percent: check_finite(cable.voltage_drop_percent, "voltage drop")?,
            cable_exceeds_table: cable.exceeds_table,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_rule() {
        assert_eq!(Phase::for_voltage(230.0, 240.0), Phase::SinglePhase);
        assert_eq!(Phase::for_voltage(240.0, 240.0), Phase::SinglePhase);
        assert_eq!(Phase::for_voltage(400.0, 240.0), Phase::ThreePhase);
    }

    #[test]
    fn three_phase_current() {
        // 5.68 kW at 400 V, cos φ 0.85
        let i = nominal_current(5.68, 400.0, 0.85, Phase::ThreePhase).unwrap();
        assert!((i - 9.645).abs() < 0.01, "i = {i}");
        let single = nominal_current(5.68, 230.0, 0.85, Phase::SinglePhase).unwrap();
        assert!(single > i);
    }

    #[test]
    fn zero_voltage_is_rejected() {
        assert!(nominal_current(1.0, 0.0, 0.85, Phase::ThreePhase).is_err());
    }

    #[test]
    fn starting_method_by_power() {
        assert_eq!(StartingMethod::recommended_for(3.0), StartingMethod::DirectOnLine);
        assert_eq!(StartingMethod::recommended_for(4.0), StartingMethod::DirectOnLine);
        assert_eq!(StartingMethod::recommended_for(11.0), StartingMethod::StarDelta);
        assert_eq!(StartingMethod::recommended_for(45.0), StartingMethod::SoftStarter);
        assert_eq!(StartingMethod::recommended_for(110.0), StartingMethod::Vfd);
    }

    #[test]
    fn short_cable_is_sized_by_ampacity() {
        let sel = cable_section(30.0, 5.0, 400.0, 0.85, Phase::ThreePhase, CableMaterial::Copper, 3.0);
        assert_eq!(sel.section_mm2, 4.0);
        assert!(!sel.exceeds_table);
    }

    #[test]
    fn long_cable_is_sized_by_voltage_drop() {
        let sel = cable_section(20.0, 300.0, 400.0, 0.85, Phase::ThreePhase, CableMaterial::Copper, 3.0);
        assert!(sel.section_mm2 > 4.0);
        assert!(sel.voltage_drop_percent <= 3.0);
    }

    #[test]
    fn aluminium_needs_a_larger_section() {
        let cu = cable_section(50.0, 100.0, 400.0, 0.85, Phase::ThreePhase, CableMaterial::Copper, 3.0);
        let al = cable_section(50.0, 100.0, 400.0, 0.85, Phase::ThreePhase, CableMaterial::Aluminum, 3.0);
        assert!(al.section_mm2 > cu.section_mm2);
    }

    #[test]
    fn oversized_load_flags_table_overflow() {
        let sel = cable_section(900.0, 10.0, 400.0, 0.85, Phase::ThreePhase, CableMaterial::Copper, 3.0);
        assert!(sel.exceeds_table);
        assert_eq!(sel.section_mm2, 300.0);
    }

    #[test]
    fn starting_method_aliases() {
        let m: StartingMethod = serde_json::from_str("\"dol\"").unwrap();
        assert_eq!(m, StartingMethod::DirectOnLine);
        let c: CableMaterial = serde_json::from_str("\"aluminium\"").unwrap();
        assert_eq!(c, CableMaterial::Aluminum);
    }
}
