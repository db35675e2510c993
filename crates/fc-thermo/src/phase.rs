//! Single-species phase base state.
//!
//! [`SingleSpeciesPhase`] owns everything a single-species phase model needs
//! apart from its own energetics: identity, the element and species
//! registrations, ambient temperature and pressure, the reference pressure,
//! the cached reference-state arrays of the one species, and the declarative
//! description of that species. Concrete models (see
//! [`crate::fixed_chem_pot`]) embed it and override only what their semantics
//! require.

use fc_core::units::constants::{GAS_CONSTANT, ONE_ATM, T_STANDARD};
use fc_core::{Quantity, ensure_positive};
use fc_project::{PhaseDef, PhaseDocument, SpeciesDef};

use crate::element::Element;
use crate::error::{ThermoError, ThermoResult};
use crate::species::Species;
use crate::species_thermo::ReferenceProperties;

/// Read-only snapshot of the ambient state handed to property derivers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermoContext {
    temperature: f64,
    pressure: f64,
}

impl ThermoContext {
    pub fn new(temperature: f64, pressure: f64) -> Self {
        Self {
            temperature,
            pressure,
        }
    }

    /// [K]
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// [Pa]
    pub fn pressure(&self) -> f64 {
        self.pressure
    }

    /// R·T [J/mol]
    pub fn rt(&self) -> f64 {
        GAS_CONSTANT * self.temperature
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SingleSpeciesPhase {
    id: String,
    name: String,
    elements: Vec<Element>,
    species: Option<Species>,
    /// Declarative description of the installed species, for re-export.
    species_data: Option<SpeciesDef>,
    temperature: f64,
    pressure: f64,
    ref_pressure: f64,
    reference: ReferenceProperties,
}

impl Default for SingleSpeciesPhase {
    fn default() -> Self {
        Self::new()
    }
}

impl SingleSpeciesPhase {
    /// An empty phase at 298.15 K and one standard atmosphere.
    pub fn new() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            elements: Vec::new(),
            species: None,
            species_data: None,
            temperature: T_STANDARD,
            pressure: ONE_ATM,
            ref_pressure: ONE_ATM,
            reference: ReferenceProperties {
                cp_r: 0.0,
                h_rt: 0.0,
                s_r: 0.0,
            },
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Register an element by symbol and return its index.
    ///
    /// Registering an element twice returns the existing index.
    pub fn add_element(&mut self, symbol: &str) -> ThermoResult<usize> {
        let element = Element::lookup(symbol)?;
        if let Some(index) = self.element_index(element.symbol) {
            return Ok(index);
        }
        self.elements.push(element);
        Ok(self.elements.len() - 1)
    }

    pub fn element_index(&self, symbol: &str) -> Option<usize> {
        self.elements.iter().position(|e| e.symbol == symbol)
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Install the phase's one species.
    ///
    /// Every element of the species must already be registered.
    pub fn add_species(&mut self, species: Species) -> ThermoResult<()> {
        if let Some(existing) = &self.species {
            return Err(ThermoError::config(
                "SingleSpeciesPhase::add_species",
                format!(
                    "phase '{}' already holds species '{}'",
                    self.id,
                    existing.name()
                ),
            ));
        }
        for symbol in species.composition().elements() {
            let known = Element::lookup(symbol)?;
            if self.element_index(known.symbol).is_none() {
                return Err(ThermoError::Composition {
                    text: species.composition().to_string(),
                    reason: format!("element '{}' is not registered in phase '{}'", symbol, self.id),
                });
            }
        }
        self.species = Some(species);
        Ok(())
    }

    pub fn species(&self) -> Option<&Species> {
        self.species.as_ref()
    }

    pub fn n_species(&self) -> usize {
        usize::from(self.species.is_some())
    }

    /// Molecular weight of the species [kg/kmol], 0.0 before a species is installed.
    pub fn molecular_weight(&self) -> f64 {
        self.species.as_ref().map_or(0.0, Species::molecular_weight)
    }

    pub fn save_species_data(&mut self, def: SpeciesDef) {
        self.species_data = Some(def);
    }

    pub fn species_data(&self) -> Option<&SpeciesDef> {
        self.species_data.as_ref()
    }

    /// Finish setup once the species is installed: adopt its reference
    /// pressure and refresh the cached reference arrays.
    ///
    /// A species without reference thermo is accepted; only
    /// [`Self::update_reference_thermo`] insists on one.
    pub fn init_thermo(&mut self) -> ThermoResult<()> {
        let species = self.species.as_ref().ok_or(ThermoError::NotInitialized)?;
        if let Some(thermo) = species.thermo() {
            self.ref_pressure = thermo.reference_pressure();
            self.reference = thermo.evaluate(self.temperature);
        }
        Ok(())
    }

    /// [K]
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Set the temperature [K]; it must be positive and finite.
    pub fn set_temperature(&mut self, t: f64) -> ThermoResult<()> {
        self.temperature = ensure_positive(t, "temperature")?;
        Ok(())
    }

    /// [Pa]
    pub fn pressure(&self) -> f64 {
        self.pressure
    }

    /// Stored as given, without validation.
    pub fn set_pressure(&mut self, p: f64) {
        self.pressure = p;
    }

    /// [Pa]
    pub fn ref_pressure(&self) -> f64 {
        self.ref_pressure
    }

    pub fn set_ref_pressure(&mut self, p0: f64) {
        self.ref_pressure = p0;
    }

    pub fn rt(&self) -> f64 {
        GAS_CONSTANT * self.temperature
    }

    pub fn context(&self) -> ThermoContext {
        ThermoContext::new(self.temperature, self.pressure)
    }

    /// Re-evaluate the species reference thermo at the current temperature.
    pub fn update_reference_thermo(&mut self) -> ThermoResult<ReferenceProperties> {
        let species = self.species.as_ref().ok_or(ThermoError::NotInitialized)?;
        let thermo = species.thermo().ok_or_else(|| {
            ThermoError::config(
                "SingleSpeciesPhase::update_reference_thermo",
                format!("species '{}' has no reference thermo", species.name()),
            )
        })?;
        if !thermo.covers(self.temperature) {
            tracing::warn!(
                species = species.name(),
                temperature = self.temperature,
                t_min = thermo.min_temp(),
                t_max = thermo.max_temp(),
                "evaluating reference thermo outside its valid range"
            );
        }
        self.reference = thermo.evaluate(self.temperature);
        Ok(self.reference)
    }

    /// Valid temperature range `[t_min, t_max]` of the species reference thermo [K].
    pub fn reference_range(&self) -> Option<(f64, f64)> {
        let thermo = self.species.as_ref()?.thermo()?;
        Some((thermo.min_temp(), thermo.max_temp()))
    }

    /// Whether the current temperature lies inside [`Self::reference_range`].
    ///
    /// `false` when there is no reference thermo.
    pub fn reference_covers_temperature(&self) -> bool {
        self.species
            .as_ref()
            .and_then(Species::thermo)
            .is_some_and(|thermo| thermo.covers(self.temperature))
    }

    /// Cached reference properties from the last refresh.
    pub fn reference(&self) -> ReferenceProperties {
        self.reference
    }

    /// Populate identity, elements and the one species from a document phase.
    pub fn import_phase(&mut self, doc: &PhaseDocument, def: &PhaseDef) -> ThermoResult<()> {
        let [species_name] = def.species.as_slice() else {
            return Err(ThermoError::config(
                "SingleSpeciesPhase::import_phase",
                format!(
                    "phase '{}' must list exactly one species, found {}",
                    def.id,
                    def.species.len()
                ),
            ));
        };
        let species_def = doc
            .find_species(species_name)
            .ok_or_else(|| ThermoError::UnknownSpecies {
                name: species_name.clone(),
            })?;

        self.set_id(def.id.clone());
        self.set_name(def.display_name());
        for symbol in &def.elements {
            self.add_element(symbol)?;
        }
        self.add_species(Species::from_def(species_def)?)?;
        self.save_species_data(species_def.clone());
        Ok(())
    }

    /// Common single-species setup from a document phase: reference pressure
    /// from the species thermo, then the optional `state` block.
    pub fn init_thermo_doc(&mut self, def: &PhaseDef) -> ThermoResult<()> {
        self.init_thermo()?;
        if let Some(state) = &def.state {
            if let Some(t) = &state.temperature {
                self.set_temperature(t.to_si(Quantity::Temperature)?)?;
            }
            if let Some(p) = &state.pressure {
                self.set_pressure(p.to_si(Quantity::Pressure)?);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composition::Composition;
    use crate::species_thermo::ConstCpThermo;
    use fc_project::{QuantityDef, SpeciesThermoDef, StateDef};

    fn sodium() -> Species {
        Species::new("NaFixed", Composition::single("Na"))
            .unwrap()
            .with_thermo(ConstCpThermo::new(0.1, 1e30, 1e5, [298.15, -1_000.0, 2.0, 0.0]).unwrap())
    }

    #[test]
    fn defaults_to_standard_conditions() {
        let phase = SingleSpeciesPhase::new();
        assert_eq!(phase.temperature(), 298.15);
        assert_eq!(phase.pressure(), ONE_ATM);
        assert_eq!(phase.ref_pressure(), ONE_ATM);
        assert_eq!(phase.n_species(), 0);
        assert_eq!(phase.molecular_weight(), 0.0);
    }

    #[test]
    fn element_registration_is_idempotent() {
        let mut phase = SingleSpeciesPhase::new();
        assert_eq!(phase.add_element("Na").unwrap(), 0);
        assert_eq!(phase.add_element("Cl").unwrap(), 1);
        assert_eq!(phase.add_element("Na").unwrap(), 0);
        assert_eq!(phase.elements().len(), 2);
    }

    #[test]
    fn species_needs_registered_elements() {
        let mut phase = SingleSpeciesPhase::new();
        let err = phase.add_species(sodium()).unwrap_err();
        assert!(matches!(err, ThermoError::Composition { .. }));
    }

    #[test]
    fn only_one_species() {
        let mut phase = SingleSpeciesPhase::new();
        phase.add_element("Na").unwrap();
        phase.add_species(sodium()).unwrap();
        assert!(matches!(
            phase.add_species(sodium()),
            Err(ThermoError::Config { .. })
        ));
        assert_eq!(phase.n_species(), 1);
    }

    #[test]
    fn init_thermo_adopts_reference_pressure() {
        let mut phase = SingleSpeciesPhase::new();
        phase.add_element("Na").unwrap();
        phase.add_species(sodium()).unwrap();
        phase.init_thermo().unwrap();
        assert_eq!(phase.ref_pressure(), 1e5);
        let rt = phase.rt();
        assert!((phase.reference().h_rt * rt + 1_000.0).abs() < 1e-9);
    }

    #[test]
    fn reference_thermo_outside_range_is_still_evaluated() {
        let mut phase = SingleSpeciesPhase::new();
        phase.add_element("Na").unwrap();
        phase.add_species(
            Species::new("NaFixed", Composition::single("Na"))
                .unwrap()
                .with_thermo(ConstCpThermo::new(100.0, 5000.0, 1e5, [298.15, -1_000.0, 2.0, 0.0]).unwrap()),
        )
        .unwrap();
        assert_eq!(phase.reference_range(), Some((100.0, 5000.0)));
        assert!(phase.reference_covers_temperature());

        phase.set_temperature(6000.0).unwrap();
        assert!(!phase.reference_covers_temperature());
        let reference = phase.update_reference_thermo().unwrap();
        assert!((reference.h_rt * phase.rt() + 1_000.0).abs() < 1e-9);
    }

    #[test]
    fn no_reference_range_without_thermo() {
        let mut phase = SingleSpeciesPhase::new();
        assert_eq!(phase.reference_range(), None);
        phase.add_element("Na").unwrap();
        phase
            .add_species(Species::new("Na", Composition::single("Na")).unwrap())
            .unwrap();
        assert_eq!(phase.reference_range(), None);
        assert!(!phase.reference_covers_temperature());
    }

    #[test]
    fn init_without_species_fails() {
        let mut phase = SingleSpeciesPhase::new();
        assert!(matches!(phase.init_thermo(), Err(ThermoError::NotInitialized)));
    }

    #[test]
    fn temperature_must_be_positive() {
        let mut phase = SingleSpeciesPhase::new();
        assert!(phase.set_temperature(0.0).is_err());
        assert!(phase.set_temperature(500.0).is_ok());
        assert_eq!(phase.context().temperature(), 500.0);
        assert!((phase.context().rt() - GAS_CONSTANT * 500.0).abs() < 1e-12);
    }

    #[test]
    fn document_state_block_is_applied() {
        let doc = PhaseDocument {
            phases: vec![PhaseDef {
                id: "NaFixed".to_string(),
                name: None,
                elements: vec!["Na".to_string()],
                species: vec!["NaFixed".to_string()],
                thermo: None,
                state: Some(StateDef {
                    temperature: Some("400 K".into()),
                    pressure: Some("2 bar".into()),
                }),
            }],
            species: vec![SpeciesDef {
                name: "NaFixed".to_string(),
                composition: "Na:1".to_string(),
                thermo: Some(SpeciesThermoDef {
                    model: "const_cp".to_string(),
                    t0: QuantityDef::Value(298.15),
                    h0: QuantityDef::Value(0.0),
                    s0: QuantityDef::Value(0.0),
                    cp0: QuantityDef::Value(0.0),
                    t_min: None,
                    t_max: None,
                    p_ref: None,
                }),
            }],
        };
        let def = &doc.phases[0];
        let mut phase = SingleSpeciesPhase::new();
        phase.import_phase(&doc, def).unwrap();
        phase.init_thermo_doc(def).unwrap();
        assert_eq!(phase.id(), "NaFixed");
        assert_eq!(phase.name(), "NaFixed");
        assert_eq!(phase.temperature(), 400.0);
        assert!((phase.pressure() - 2e5).abs() < 1e-6);
        assert!(phase.species_data().is_some());
    }

    #[test]
    fn import_requires_exactly_one_species() {
        let doc = PhaseDocument {
            phases: vec![PhaseDef {
                id: "empty".to_string(),
                name: None,
                elements: vec![],
                species: vec![],
                thermo: None,
                state: None,
            }],
            species: vec![],
        };
        let mut phase = SingleSpeciesPhase::new();
        assert!(matches!(
            phase.import_phase(&doc, &doc.phases[0]),
            Err(ThermoError::Config { .. })
        ));
    }
}
