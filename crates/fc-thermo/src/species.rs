//! Species definitions.

use fc_project::SpeciesDef;

use crate::composition::Composition;
use crate::element::Element;
use crate::error::ThermoResult;
use crate::species_thermo::ConstCpThermo;

/// A chemical species: name, elemental composition and optional reference thermo.
#[derive(Debug, Clone, PartialEq)]
pub struct Species {
    name: String,
    composition: Composition,
    thermo: Option<ConstCpThermo>,
    /// [kg/kmol]
    molecular_weight: f64,
}

impl Species {
    /// Create a species; every element in `composition` must be in the element table.
    pub fn new(name: impl Into<String>, composition: Composition) -> ThermoResult<Self> {
        let mut molecular_weight = 0.0;
        for (symbol, count) in composition.iter() {
            molecular_weight += count * Element::lookup(symbol)?.atomic_weight;
        }
        Ok(Self {
            name: name.into(),
            composition,
            thermo: None,
            molecular_weight,
        })
    }

    pub fn with_thermo(mut self, thermo: ConstCpThermo) -> Self {
        self.thermo = Some(thermo);
        self
    }

    /// Build from a document species entry, including its `thermo` block if present.
    pub fn from_def(def: &SpeciesDef) -> ThermoResult<Self> {
        let species = Self::new(def.name.clone(), Composition::parse(&def.composition)?)?;
        Ok(match &def.thermo {
            Some(thermo) => species.with_thermo(ConstCpThermo::from_def(thermo)?),
            None => species,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn composition(&self) -> &Composition {
        &self.composition
    }

    pub fn thermo(&self) -> Option<&ConstCpThermo> {
        self.thermo.as_ref()
    }

    pub fn molecular_weight(&self) -> f64 {
        self.molecular_weight
    }
}
