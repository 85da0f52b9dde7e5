//! Everything a rule group may look at.

use hp_core::units::m3ph;
use hp_fluids::{FluidId, FluidProperties, properties_at};
use hp_hydraulics::{
    CableMaterial, DesignLimits, HmtInput, HmtResult, HydraulicResult, InstallationType,
    NpshdInput, NpshdResult, PerformanceInput, PerformanceResult, PipeRun, StartingMethod,
    SuctionType, calculate_hmt, calculate_npshd, calculate_performance,
};
use serde::{Deserialize, Serialize};

/// Operating site and tariff.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConditions {
    /// h/year
    pub operating_hours: f64,
    /// Currency per kWh
    pub electricity_cost: f64,
    /// m above sea level
    pub altitude: f64,
    /// °C
    pub ambient_temperature: f64,
    /// % relative humidity
    pub humidity: f64,
}

impl Default for SiteConditions {
    fn default() -> Self {
        Self {
            operating_hours: 4000.0,
            electricity_cost: 0.15,
            altitude: 0.0,
            ambient_temperature: 25.0,
            humidity: 50.0,
        }
    }
}

/// Inputs and computed results of one installation.
#[derive(Debug, Clone, Copy)]
pub struct ExpertContext<'a> {
    pub fluid: FluidId,
    pub temperature_c: f64,
    /// m³/h
    pub flow_m3h: f64,
    pub installation_type: InstallationType,
    pub suction_type: SuctionType,
    /// m
    pub hasp: f64,
    /// Suction leg; `None` for submersible installations.
    pub suction: Option<&'a PipeRun>,
    pub discharge: &'a PipeRun,
    /// %
    pub pump_efficiency: f64,
    /// %
    pub motor_efficiency: f64,
    pub power_factor: f64,
    /// m
    pub cable_length: f64,
    pub npshd: &'a NpshdResult,
    pub hmt: &'a HmtResult,
    pub performance: &'a PerformanceResult,
    pub site: SiteConditions,
    pub limits: &'a DesignLimits,
}

impl ExpertContext<'_> {
    pub fn fluid_properties(&self) -> FluidProperties {
        properties_at(self.fluid, self.temperature_c)
    }

    pub fn absorbed_power_kw(&self) -> f64 {
        self.performance.power_calculations.absorbed_power
    }

    pub fn annual_energy_kwh(&self) -> f64 {
        self.absorbed_power_kw() * self.site.operating_hours
    }

    pub fn annual_cost(&self) -> f64 {
        self.annual_energy_kwh() * self.site.electricity_cost
    }

    /// Legs present in the installation, labelled.
    pub fn legs(&self) -> Vec<(&'static str, &PipeRun)> {
        let mut legs = Vec::with_capacity(2);
        if let Some(s) = self.suction {
            legs.push(("Suction", s));
        }
        legs.push(("Discharge", self.discharge));
        legs
    }

    pub fn is_suction_lift(&self) -> bool {
        self.installation_type == InstallationType::Surface
            && self.suction_type == SuctionType::SuctionLift
    }
}

/// Complete description of an installation for expert analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct Installation {
    pub fluid: FluidId,
    pub temperature_c: f64,
    /// m³/h
    pub flow_m3h: f64,
    pub installation_type: InstallationType,
    pub suction_type: SuctionType,
    /// m
    pub hasp: f64,
    /// m
    pub discharge_height: f64,
    /// bar
    pub useful_pressure_bar: f64,
    /// Suction (or intake, for submersible pumps) leg
    pub suction: PipeRun,
    pub discharge: PipeRun,
    pub npsh_required: Option<f64>,
    pub pump_efficiency: f64,
    pub motor_efficiency: f64,
    pub voltage: f64,
    pub power_factor: f64,
    pub starting_method: StartingMethod,
    pub cable_length: f64,
    pub cable_material: CableMaterial,
}

/// An installation with its NPSHd, HMT and performance results.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub installation: Installation,
    pub npshd: NpshdResult,
    pub hmt: HmtResult,
    pub performance: PerformanceResult,
    pub site: SiteConditions,
    pub limits: DesignLimits,
}

impl Evaluation {
    /// Run the three calculators in sequence.
    ///
    /// A submersible pump sits below the liquid level, so its NPSHd is
    /// evaluated as a flooded suction over the intake leg.
    pub fn compute(
        installation: Installation,
        site: SiteConditions,
        limits: DesignLimits,
    ) -> HydraulicResult<Self> {
        let inst = &installation;
        let flow = m3ph(inst.flow_m3h);
        let submersible = inst.installation_type == InstallationType::Submersible;

        let npshd = calculate_npshd(
            &NpshdInput {
                suction_type: if submersible {
                    SuctionType::Flooded
                } else {
                    inst.suction_type
                },
                hasp: inst.hasp,
                flow,
                fluid: inst.fluid,
                temperature_c: inst.temperature_c,
                suction: inst.suction.clone(),
                npsh_required: inst.npsh_required,
            },
            &limits,
        )?;

        let hmt = calculate_hmt(
            &HmtInput {
                installation_type: inst.installation_type,
                suction_type: inst.suction_type,
                hasp: inst.hasp,
                discharge_height: inst.discharge_height,
                useful_pressure_bar: inst.useful_pressure_bar,
                suction: (!submersible).then(|| inst.suction.clone()),
                discharge: inst.discharge.clone(),
                fluid: inst.fluid,
                temperature_c: inst.temperature_c,
                flow,
            },
            &limits,
        )?;

        let performance = calculate_performance(
            &PerformanceInput {
                flow,
                // A negative head needs no pump work.
                hmt: hmt.hmt.max(0.0),
                pipe: inst.discharge.clone(),
                fluid: inst.fluid,
                temperature_c: inst.temperature_c,
                pump_efficiency: inst.pump_efficiency,
                motor_efficiency: inst.motor_efficiency,
                voltage: inst.voltage,
                power_factor: inst.power_factor,
                starting_method: inst.starting_method,
                cable_length: inst.cable_length,
                cable_material: inst.cable_material,
            },
            &limits,
        )?;

        Ok(Self {
            installation,
            npshd,
            hmt,
            performance,
            site,
            limits,
        })
    }

    pub fn context(&self) -> ExpertContext<'_> {
        let inst = &self.installation;
        ExpertContext {
            fluid: inst.fluid,
            temperature_c: inst.temperature_c,
            flow_m3h: inst.flow_m3h,
            installation_type: inst.installation_type,
            suction_type: inst.suction_type,
            hasp: inst.hasp,
            suction: (inst.installation_type == InstallationType::Surface).then_some(&inst.suction),
            discharge: &inst.discharge,
            pump_efficiency: inst.pump_efficiency,
            motor_efficiency: inst.motor_efficiency,
            power_factor: inst.power_factor,
            cable_length: inst.cable_length,
            npshd: &self.npshd,
            hmt: &self.hmt,
            performance: &self.performance,
            site: self.site,
            limits: &self.limits,
        }
    }
}
