//! Single-species incompressible phase with a fixed molar chemical potential.
//!
//! The whole standard-state property set follows from one scalar, the molar
//! chemical potential μ [J/mol], together with the ambient temperature held
//! by the base:
//!
//! | Property | Value |
//! |---|---|
//! | μ° | μ |
//! | h°/RT, g°/RT | μ/RT |
//! | s°/R, cp°/R | 0 |
//! | u°/RT | μ (no RT divisor) |
//! | molar volumes | 0 |
//!
//! Reference-state accessors return the same values: the phase has no
//! reference state separate from its one actual state.
//!
//! The internal-energy accessors report μ itself rather than μ/RT. That is
//! the established behavior of this model and is kept as is; treat `u°/RT`
//! from this phase as carrying J/mol.

use std::path::Path;
use std::str::FromStr;

use fc_core::units::constants::{ONE_ATM, T_STANDARD};
use fc_core::units::{Pressure, Temperature, pressure_pa, temperature_k};
use fc_core::{Quantity, parse_quantity};
use fc_project::{
    PhaseDef, PhaseDocument, QuantityDef, SpeciesDef, SpeciesThermoDef, StateDef, ThermoDef,
};

use crate::composition::Composition;
use crate::error::{ThermoError, ThermoResult};
use crate::model::{EosType, PropertySnapshot, ThermoPhase};
use crate::phase::{SingleSpeciesPhase, ThermoContext};
use crate::species::Species;
use crate::species_thermo::ConstCpThermo;

/// Spelling checked by [`FixedChemPotPhase::set_parameters_from_doc`].
///
/// It is not one of the [`ThermoModel`] names, so the update branch guarded
/// by it never runs after the alias check passes.
const SSTP_MODEL_SPELLING: &str = "FixedChemPotSSTP";

/// Recognized values of the phase `thermo.model` attribute.
///
/// All three select the same phase model; they differ only in how the
/// declarative initializer obtains the chemical potential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThermoModel {
    /// Legacy name: μ is frozen from the species reference thermo.
    StoichSubstance,
    /// Legacy name: μ is frozen from the species reference thermo.
    StoichSubstanceSstp,
    /// Canonical name: μ is read from `chemicalPotential`.
    FixedChemPot,
}

impl ThermoModel {
    pub const ALL: [ThermoModel; 3] = [
        ThermoModel::StoichSubstance,
        ThermoModel::StoichSubstanceSstp,
        ThermoModel::FixedChemPot,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThermoModel::StoichSubstance => "StoichSubstance",
            ThermoModel::StoichSubstanceSstp => "StoichSubstanceSSTP",
            ThermoModel::FixedChemPot => "FixedChemPot",
        }
    }

    /// Whether μ comes from evaluating the reference thermo once at setup.
    pub fn freezes_reference_thermo(&self) -> bool {
        !matches!(self, ThermoModel::FixedChemPot)
    }

    /// Resolve a raw attribute, reporting failures against `method`.
    fn resolve(raw: &str, method: &'static str) -> ThermoResult<Self> {
        raw.parse().map_err(|_| {
            ThermoError::config(
                method,
                format!(
                    "thermo model attribute must be FixedChemPot or StoichSubstance or StoichSubstanceSSTP, got '{}'",
                    raw
                ),
            )
        })
    }
}

impl FromStr for ThermoModel {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThermoModel::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or("unknown thermo model")
    }
}

/// Pure property derivations from μ and the ambient context.
///
/// Each function returns the value for the phase's single species.
pub mod properties {
    use crate::phase::ThermoContext;

    pub fn standard_chem_potential(mu: f64, _ctx: &ThermoContext) -> f64 {
        mu
    }

    /// G = H when S = 0.
    pub fn enthalpy_rt(mu: f64, ctx: &ThermoContext) -> f64 {
        mu / ctx.rt()
    }

    pub fn entropy_r(_mu: f64, _ctx: &ThermoContext) -> f64 {
        0.0
    }

    pub fn gibbs_rt(mu: f64, ctx: &ThermoContext) -> f64 {
        mu / ctx.rt()
    }

    pub fn cp_r(_mu: f64, _ctx: &ThermoContext) -> f64 {
        0.0
    }

    /// Reported as μ, not μ/RT, and without a PV correction.
    pub fn int_energy_rt(mu: f64, _ctx: &ThermoContext) -> f64 {
        mu
    }

    pub fn molar_volume(_mu: f64, _ctx: &ThermoContext) -> f64 {
        0.0
    }
}

/// Fixed-chemical-potential phase.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedChemPotPhase {
    base: SingleSpeciesPhase,
    /// Molar chemical potential [J/mol]
    chem_pot: f64,
}

impl Default for FixedChemPotPhase {
    fn default() -> Self {
        Self::new()
    }
}

impl FixedChemPotPhase {
    /// Staging object with μ = 0 and no species; populate it with
    /// [`Self::import`] before querying properties.
    pub fn new() -> Self {
        Self {
            base: SingleSpeciesPhase::new(),
            chem_pot: 0.0,
        }
    }

    /// Load the phase `id` (or the first phase) from a YAML or JSON document.
    pub fn from_file(path: &Path, id: Option<&str>) -> ThermoResult<Self> {
        let doc = fc_project::load(path)?;
        let def = doc.find_phase(id).ok_or_else(|| {
            ThermoError::config(
                "FixedChemPotPhase::from_file",
                format!(
                    "phase '{}' not found in {}",
                    id.unwrap_or("<first>"),
                    path.display()
                ),
            )
        })?;
        Self::from_document(&doc, def)
    }

    /// Build from one phase of an in-memory document.
    pub fn from_document(doc: &PhaseDocument, def: &PhaseDef) -> ThermoResult<Self> {
        let mut phase = Self::new();
        phase.import(doc, def)?;
        Ok(phase)
    }

    /// Build a complete phase in-process from an element symbol and μ [J/mol].
    ///
    /// The phase and its species are both named `"<symbol>Fixed"`. The
    /// species carries a constant-cp reference thermo with h° = μ and
    /// s° = cp° = 0 at 298.15 K, and the equivalent declarative species
    /// description is saved for [`Self::to_document`].
    pub fn from_element(symbol: &str, value: f64) -> ThermoResult<Self> {
        let pname = format!("{}Fixed", symbol);
        let mut phase = Self::new();
        phase.base.set_id(pname.clone());
        phase.base.set_name(pname.clone());
        phase.base.add_element(symbol)?;

        let thermo = ConstCpThermo::new(0.1, 1e30, ONE_ATM, [T_STANDARD, value, 0.0, 0.0])?;
        let species =
            Species::new(pname.clone(), Composition::parse(&format!("{}:1.0", symbol))?)?
                .with_thermo(thermo);
        phase.base.add_species(species)?;
        phase.base.init_thermo()?;
        phase.base.set_ref_pressure(ONE_ATM);
        phase.base.set_pressure(ONE_ATM);
        phase.base.set_temperature(T_STANDARD)?;
        phase.set_chemical_potential(value);

        phase.base.save_species_data(SpeciesDef {
            name: pname,
            composition: format!("{}:1", symbol),
            thermo: Some(SpeciesThermoDef {
                model: "Simple".to_string(),
                t0: QuantityDef::Value(T_STANDARD),
                h0: QuantityDef::Value(value),
                s0: QuantityDef::Value(0.0),
                cp0: QuantityDef::Value(0.0),
                t_min: Some(QuantityDef::Value(100.0)),
                t_max: Some(QuantityDef::Value(5000.0)),
                p_ref: Some(QuantityDef::Text("1 bar".to_string())),
            }),
        });

        tracing::debug!(phase = phase.base.id(), chem_pot = value, "built fixed chemical potential phase");
        Ok(phase)
    }

    /// Import elements and species from `def`, then run the declarative initializer.
    pub fn import(&mut self, doc: &PhaseDocument, def: &PhaseDef) -> ThermoResult<()> {
        self.base.import_phase(doc, def)?;
        self.init_thermo_doc(def)?;
        tracing::debug!(phase = self.base.id(), chem_pot = self.chem_pot, "imported fixed chemical potential phase");
        Ok(())
    }

    /// Declarative initializer for a phase whose species are already installed.
    ///
    /// The `thermo` block and its model name are checked before anything is
    /// changed, so a rejected document leaves μ untouched.
    pub fn init_thermo_doc(&mut self, def: &PhaseDef) -> ThermoResult<()> {
        const METHOD: &str = "FixedChemPotPhase::init_thermo_doc";

        let thermo = def
            .thermo
            .as_ref()
            .ok_or_else(|| ThermoError::config(METHOD, "no thermo node"))?;
        let model = ThermoModel::resolve(&thermo.model, METHOD)?;
        let explicit = if model.freezes_reference_thermo() {
            None
        } else {
            Some(read_chemical_potential(thermo, METHOD)?)
        };

        self.base.init_thermo_doc(def)?;

        self.chem_pot = match explicit {
            Some(value) => value,
            None => {
                let reference = self.base.update_reference_thermo()?;
                let value = (reference.h_rt - reference.s_r) * self.base.rt();
                tracing::info!(
                    phase = self.base.id(),
                    model = model.as_str(),
                    temperature = self.base.temperature(),
                    chem_pot = value,
                    "froze chemical potential from reference thermo"
                );
                value
            }
        };
        Ok(())
    }

    /// Molar chemical potential [J/mol].
    pub fn chemical_potential(&self) -> f64 {
        self.chem_pot
    }

    pub fn set_chemical_potential(&mut self, chem_pot: f64) {
        tracing::debug!(phase = self.base.id(), chem_pot, "set chemical potential");
        self.chem_pot = chem_pot;
    }

    pub fn id(&self) -> &str {
        self.base.id()
    }

    pub fn base(&self) -> &SingleSpeciesPhase {
        &self.base
    }

    /// Molecular weight of the species [kg/kmol].
    pub fn molecular_weight(&self) -> f64 {
        self.base.molecular_weight()
    }

    pub fn context(&self) -> ThermoContext {
        self.base.context()
    }

    pub fn set_state_tp(&mut self, t: Temperature, p: Pressure) -> ThermoResult<()> {
        self.base.set_temperature(temperature_k(t))?;
        self.base.set_pressure(pressure_pa(p));
        Ok(())
    }

    pub fn snapshot(&self) -> PropertySnapshot {
        PropertySnapshot::capture(self)
    }

    /// Describe the phase as a document that loads back into an equivalent phase.
    pub fn to_document(&self) -> ThermoResult<PhaseDocument> {
        let species = self
            .base
            .species_data()
            .cloned()
            .ok_or(ThermoError::NotInitialized)?;
        let name = (self.base.name() != self.base.id()).then(|| self.base.name().to_string());
        let phase = PhaseDef {
            id: self.base.id().to_string(),
            name,
            elements: self
                .base
                .elements()
                .iter()
                .map(|e| e.symbol.to_string())
                .collect(),
            species: vec![species.name.clone()],
            thermo: Some(ThermoDef {
                model: ThermoModel::FixedChemPot.as_str().to_string(),
                chemical_potential: Some(QuantityDef::Value(self.chem_pot)),
            }),
            state: Some(StateDef {
                temperature: Some(QuantityDef::Value(self.base.temperature())),
                pressure: Some(QuantityDef::Value(self.base.pressure())),
            }),
        };
        Ok(PhaseDocument {
            phases: vec![phase],
            species: vec![species],
        })
    }

    fn mu(&self) -> f64 {
        self.chem_pot
    }
}

fn read_chemical_potential(thermo: &ThermoDef, method: &'static str) -> ThermoResult<f64> {
    let raw = thermo
        .chemical_potential
        .as_ref()
        .ok_or_else(|| ThermoError::config(method, "missing chemicalPotential"))?;
    Ok(raw.to_si(Quantity::MolarEnergy)?)
}

impl ThermoPhase for FixedChemPotPhase {
    fn eos_type(&self) -> EosType {
        EosType::FixedChemPot
    }

    fn name(&self) -> &str {
        self.base.name()
    }

    fn n_species(&self) -> usize {
        self.base.n_species()
    }

    fn temperature(&self) -> f64 {
        self.base.temperature()
    }

    fn set_temperature(&mut self, t: f64) -> ThermoResult<()> {
        self.base.set_temperature(t)
    }

    fn pressure(&self) -> f64 {
        self.base.pressure()
    }

    fn set_pressure(&mut self, p: f64) {
        self.base.set_pressure(p);
    }

    fn isothermal_compressibility(&self) -> f64 {
        0.0
    }

    fn thermal_expansion_coeff(&self) -> f64 {
        0.0
    }

    fn activity_concentrations(&self) -> Vec<f64> {
        vec![1.0]
    }

    fn standard_concentration(&self, _k: usize) -> f64 {
        1.0
    }

    fn log_standard_conc(&self, _k: usize) -> f64 {
        0.0
    }

    fn standard_chem_potentials(&self) -> Vec<f64> {
        vec![properties::standard_chem_potential(self.mu(), &self.context())]
    }

    fn enthalpy_rt(&self) -> Vec<f64> {
        vec![properties::enthalpy_rt(self.mu(), &self.context())]
    }

    fn entropy_r(&self) -> Vec<f64> {
        vec![properties::entropy_r(self.mu(), &self.context())]
    }

    fn gibbs_rt(&self) -> Vec<f64> {
        vec![properties::gibbs_rt(self.mu(), &self.context())]
    }

    fn cp_r(&self) -> Vec<f64> {
        vec![properties::cp_r(self.mu(), &self.context())]
    }

    fn int_energy_rt(&self) -> Vec<f64> {
        vec![properties::int_energy_rt(self.mu(), &self.context())]
    }

    fn standard_volumes(&self) -> Vec<f64> {
        vec![properties::molar_volume(self.mu(), &self.context())]
    }

    fn partial_molar_volumes(&self) -> Vec<f64> {
        vec![properties::molar_volume(self.mu(), &self.context())]
    }

    fn enthalpy_rt_ref(&self) -> Vec<f64> {
        self.enthalpy_rt()
    }

    fn entropy_r_ref(&self) -> Vec<f64> {
        self.entropy_r()
    }

    fn gibbs_rt_ref(&self) -> Vec<f64> {
        self.gibbs_rt()
    }

    fn gibbs_ref(&self) -> Vec<f64> {
        self.standard_chem_potentials()
    }

    fn cp_r_ref(&self) -> Vec<f64> {
        self.cp_r()
    }

    fn int_energy_rt_ref(&self) -> Vec<f64> {
        self.int_energy_rt()
    }

    /// `c[0]` becomes μ; an empty slice is ignored.
    fn set_parameters(&mut self, c: &[f64]) {
        if let Some(&value) = c.first() {
            self.set_chemical_potential(value);
        }
    }

    fn get_parameters(&self) -> Vec<f64> {
        vec![self.chem_pot]
    }

    /// Validates the model name against the three accepted aliases.
    ///
    /// μ is only overwritten when the raw attribute is `FixedChemPotSSTP`,
    /// which the alias check rejects first, so a successful call leaves μ
    /// unchanged. Use [`FixedChemPotPhase::init_thermo_doc`] to apply a
    /// document's chemical potential.
    fn set_parameters_from_doc(&mut self, thermo: &ThermoDef) -> ThermoResult<()> {
        const METHOD: &str = "FixedChemPotPhase::set_parameters_from_doc";

        ThermoModel::resolve(&thermo.model, METHOD)?;
        if thermo.model == SSTP_MODEL_SPELLING {
            self.chem_pot = read_chemical_potential(thermo, METHOD)?;
        }
        Ok(())
    }

    fn clone_phase(&self) -> Box<dyn ThermoPhase> {
        Box::new(self.clone())
    }
}

/// Parse `"value unit"` text as a molar energy [J/mol].
pub fn parse_chemical_potential(text: &str) -> ThermoResult<f64> {
    Ok(parse_quantity(text, Quantity::MolarEnergy)?)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn chem_pot_drives_gibbs(x in -1.0e7_f64..1.0e7, t in 1.0_f64..5_000.0) {
            let mut phase = FixedChemPotPhase::from_element("Na", 0.0).unwrap();
            phase.set_temperature(t).unwrap();
            phase.set_chemical_potential(x);
            prop_assert_eq!(phase.standard_chem_potentials(), vec![x]);
            prop_assert_eq!(phase.gibbs_rt(), vec![x / phase.rt()]);
            prop_assert_eq!(phase.gibbs_ref(), phase.standard_chem_potentials());
        }

        #[test]
        fn zero_properties_stay_zero(x in -1.0e7_f64..1.0e7, t in 1.0_f64..5_000.0, p in -1.0e7_f64..1.0e7) {
            let mut phase = FixedChemPotPhase::from_element("Na", x).unwrap();
            phase.set_temperature(t).unwrap();
            phase.set_pressure(p);
            prop_assert_eq!(phase.pressure(), p);
            prop_assert_eq!(phase.entropy_r(), vec![0.0]);
            prop_assert_eq!(phase.cp_r(), vec![0.0]);
            prop_assert_eq!(phase.standard_volumes(), vec![0.0]);
            prop_assert_eq!(phase.partial_molar_volumes(), vec![0.0]);
            prop_assert_eq!(phase.isothermal_compressibility(), 0.0);
            prop_assert_eq!(phase.thermal_expansion_coeff(), 0.0);
        }

        #[test]
        fn parameter_round_trip(x in proptest::num::f64::ANY) {
            let mut phase = FixedChemPotPhase::new();
            phase.set_parameters(&[x]);
            let c = phase.get_parameters();
            prop_assert_eq!(c.len(), 1);
            prop_assert_eq!(c[0].to_bits(), x.to_bits());
        }

        #[test]
        fn clone_matches_source(x in -1.0e7_f64..1.0e7, t in 1.0_f64..5_000.0) {
            let mut phase = FixedChemPotPhase::from_element("Ca", x).unwrap();
            phase.set_temperature(t).unwrap();
            let copy = phase.clone_phase();
            prop_assert_eq!(PropertySnapshot::capture(copy.as_ref()), phase.snapshot());
        }
    }
}
