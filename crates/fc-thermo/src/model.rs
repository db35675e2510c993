//! Phase model contract and property snapshot.

use std::fmt;

use fc_core::units::constants::GAS_CONSTANT;
use fc_project::ThermoDef;

use crate::error::ThermoResult;

/// Equation-of-state family of a phase model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EosType {
    /// Single species with a fixed molar chemical potential.
    FixedChemPot,
}

impl EosType {
    pub fn name(&self) -> &'static str {
        match self {
            EosType::FixedChemPot => "FixedChemPot",
        }
    }
}

impl fmt::Display for EosType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything an equilibrium or kinetics solver asks of a phase.
///
/// Per-species outputs are returned as vectors of length
/// [`ThermoPhase::n_species`]. Molar energies are J/mol; `_rt` and `_r`
/// quantities are dimensionless.
///
/// Implementations must be thread-safe (Send + Sync) so read-only phases can
/// be shared between workers; mutation goes through `&mut self`.
pub trait ThermoPhase: Send + Sync + fmt::Debug {
    fn eos_type(&self) -> EosType;

    /// Phase name (for logging and display).
    fn name(&self) -> &str;

    fn n_species(&self) -> usize;

    /// Temperature [K].
    fn temperature(&self) -> f64;

    fn set_temperature(&mut self, t: f64) -> ThermoResult<()>;

    /// Pressure [Pa].
    fn pressure(&self) -> f64;

    fn set_pressure(&mut self, p: f64);

    /// R·T [J/mol].
    fn rt(&self) -> f64 {
        GAS_CONSTANT * self.temperature()
    }

    /// Isothermal compressibility [1/Pa].
    fn isothermal_compressibility(&self) -> f64;

    /// Volumetric thermal expansion coefficient [1/K].
    fn thermal_expansion_coeff(&self) -> f64;

    // ---- Activities and concentrations ----

    fn activity_concentrations(&self) -> Vec<f64>;

    fn standard_concentration(&self, k: usize) -> f64;

    fn log_standard_conc(&self, k: usize) -> f64;

    // ---- Standard state ----

    /// Standard-state chemical potentials μ° [J/mol].
    fn standard_chem_potentials(&self) -> Vec<f64>;

    fn enthalpy_rt(&self) -> Vec<f64>;

    fn entropy_r(&self) -> Vec<f64>;

    fn gibbs_rt(&self) -> Vec<f64>;

    fn cp_r(&self) -> Vec<f64>;

    fn int_energy_rt(&self) -> Vec<f64>;

    /// Standard-state molar volumes [m³/mol].
    fn standard_volumes(&self) -> Vec<f64>;

    /// Partial molar volumes [m³/mol].
    fn partial_molar_volumes(&self) -> Vec<f64>;

    // ---- Reference state ----

    fn enthalpy_rt_ref(&self) -> Vec<f64>;

    fn entropy_r_ref(&self) -> Vec<f64>;

    fn gibbs_rt_ref(&self) -> Vec<f64>;

    /// Reference-state Gibbs energies [J/mol].
    fn gibbs_ref(&self) -> Vec<f64>;

    fn cp_r_ref(&self) -> Vec<f64>;

    fn int_energy_rt_ref(&self) -> Vec<f64>;

    // ---- Model parameters ----

    fn set_parameters(&mut self, c: &[f64]);

    fn get_parameters(&self) -> Vec<f64>;

    /// Update parameters from a phase `thermo` block.
    fn set_parameters_from_doc(&mut self, thermo: &ThermoDef) -> ThermoResult<()>;

    /// Independent copy behind the trait object.
    fn clone_phase(&self) -> Box<dyn ThermoPhase>;
}

impl Clone for Box<dyn ThermoPhase> {
    fn clone(&self) -> Self {
        self.clone_phase()
    }
}

/// Every accessor output of a phase, captured at one instant.
///
/// Useful for comparing two phases (e.g. a clone against its source), for
/// logging, and for display.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertySnapshot {
    pub eos_type: EosType,
    /// [K]
    pub temperature: f64,
    /// [Pa]
    pub pressure: f64,
    pub isothermal_compressibility: f64,
    pub thermal_expansion_coeff: f64,
    pub activity_concentrations: Vec<f64>,
    pub standard_concentration: f64,
    pub log_standard_conc: f64,
    pub standard_chem_potentials: Vec<f64>,
    pub enthalpy_rt: Vec<f64>,
    pub entropy_r: Vec<f64>,
    pub gibbs_rt: Vec<f64>,
    pub cp_r: Vec<f64>,
    pub int_energy_rt: Vec<f64>,
    pub standard_volumes: Vec<f64>,
    pub partial_molar_volumes: Vec<f64>,
    pub enthalpy_rt_ref: Vec<f64>,
    pub entropy_r_ref: Vec<f64>,
    pub gibbs_rt_ref: Vec<f64>,
    pub gibbs_ref: Vec<f64>,
    pub cp_r_ref: Vec<f64>,
    pub int_energy_rt_ref: Vec<f64>,
    pub parameters: Vec<f64>,
}

impl PropertySnapshot {
    pub fn capture(phase: &dyn ThermoPhase) -> Self {
        Self {
            eos_type: phase.eos_type(),
            temperature: phase.temperature(),
            pressure: phase.pressure(),
            isothermal_compressibility: phase.isothermal_compressibility(),
            thermal_expansion_coeff: phase.thermal_expansion_coeff(),
            activity_concentrations: phase.activity_concentrations(),
            standard_concentration: phase.standard_concentration(0),
            log_standard_conc: phase.log_standard_conc(0),
            standard_chem_potentials: phase.standard_chem_potentials(),
            enthalpy_rt: phase.enthalpy_rt(),
            entropy_r: phase.entropy_r(),
            gibbs_rt: phase.gibbs_rt(),
            cp_r: phase.cp_r(),
            int_energy_rt: phase.int_energy_rt(),
            standard_volumes: phase.standard_volumes(),
            partial_molar_volumes: phase.partial_molar_volumes(),
            enthalpy_rt_ref: phase.enthalpy_rt_ref(),
            entropy_r_ref: phase.entropy_r_ref(),
            gibbs_rt_ref: phase.gibbs_rt_ref(),
            gibbs_ref: phase.gibbs_ref(),
            cp_r_ref: phase.cp_r_ref(),
            int_energy_rt_ref: phase.int_energy_rt_ref(),
            parameters: phase.get_parameters(),
        }
    }

    /// Return a one-line summary (for logging).
    pub fn summary(&self) -> String {
        format!(
            "Snapshot({},T={:.2}K,P={:.0}Pa,mu0={:?}J/mol,g/RT={:?},s/R={:?},cp/R={:?})",
            self.eos_type,
            self.temperature,
            self.pressure,
            self.standard_chem_potentials,
            self.gibbs_rt,
            self.entropy_r,
            self.cp_r
        )
    }

    /// Labelled rows of the per-species properties, in display order.
    pub fn rows(&self) -> Vec<(&'static str, &[f64])> {
        vec![
            ("activity concentration", self.activity_concentrations.as_slice()),
            ("standard chemical potential [J/mol]", self.standard_chem_potentials.as_slice()),
            ("enthalpy / RT", self.enthalpy_rt.as_slice()),
            ("entropy / R", self.entropy_r.as_slice()),
            ("Gibbs / RT", self.gibbs_rt.as_slice()),
            ("heat capacity / R", self.cp_r.as_slice()),
            ("internal energy / RT", self.int_energy_rt.as_slice()),
            ("standard volume [m^3/mol]", self.standard_volumes.as_slice()),
            ("partial molar volume [m^3/mol]", self.partial_molar_volumes.as_slice()),
            ("enthalpy / RT (ref)", self.enthalpy_rt_ref.as_slice()),
            ("entropy / R (ref)", self.entropy_r_ref.as_slice()),
            ("Gibbs / RT (ref)", self.gibbs_rt_ref.as_slice()),
            ("Gibbs [J/mol] (ref)", self.gibbs_ref.as_slice()),
            ("heat capacity / R (ref)", self.cp_r_ref.as_slice()),
            ("internal energy / RT (ref)", self.int_energy_rt_ref.as_slice()),
        ]
    }
}
