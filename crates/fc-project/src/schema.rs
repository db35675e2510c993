//! Phase document schema definitions.

use fc_core::{Quantity, UnitError, parse_quantity};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PhaseDocument {
    #[serde(default)]
    pub phases: Vec<PhaseDef>,
    #[serde(default)]
    pub species: Vec<SpeciesDef>,
}

impl PhaseDocument {
    /// Phase with the given id, or the first phase when `id` is `None`.
    pub fn find_phase(&self, id: Option<&str>) -> Option<&PhaseDef> {
        match id {
            Some(id) => self.phases.iter().find(|p| p.id == id),
            None => self.phases.first(),
        }
    }

    pub fn find_species(&self, name: &str) -> Option<&SpeciesDef> {
        self.species.iter().find(|s| s.name == name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhaseDef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub elements: Vec<String>,
    #[serde(default)]
    pub species: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thermo: Option<ThermoDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<StateDef>,
}

impl PhaseDef {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// The phase-level `thermo` block.
///
/// `model` stays a raw string here; resolving it to a known model is the
/// phase initializer's job so that an unknown name surfaces as a
/// configuration error rather than a parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ThermoDef {
    #[serde(default)]
    pub model: String,
    #[serde(
        rename = "chemicalPotential",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub chemical_potential: Option<QuantityDef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StateDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<QuantityDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure: Option<QuantityDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpeciesDef {
    pub name: String,
    /// Element counts, e.g. `"Na:1"` or `"Si:1 O:2"`.
    pub composition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thermo: Option<SpeciesThermoDef>,
}

/// Reference-state thermo for one species.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpeciesThermoDef {
    pub model: String,
    pub t0: QuantityDef,
    pub h0: QuantityDef,
    #[serde(default = "QuantityDef::zero")]
    pub s0: QuantityDef,
    #[serde(default = "QuantityDef::zero")]
    pub cp0: QuantityDef,
    #[serde(rename = "Tmin", default, skip_serializing_if = "Option::is_none")]
    pub t_min: Option<QuantityDef>,
    #[serde(rename = "Tmax", default, skip_serializing_if = "Option::is_none")]
    pub t_max: Option<QuantityDef>,
    #[serde(rename = "Pref", default, skip_serializing_if = "Option::is_none")]
    pub p_ref: Option<QuantityDef>,
}

/// A scalar that is either a bare SI number or `"value unit"` text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum QuantityDef {
    Value(f64),
    Text(String),
}

impl QuantityDef {
    pub fn zero() -> Self {
        Self::Value(0.0)
    }

    pub fn to_si(&self, quantity: Quantity) -> Result<f64, UnitError> {
        match self {
            Self::Value(v) => Ok(*v),
            Self::Text(text) => parse_quantity(text, quantity),
        }
    }
}

impl From<f64> for QuantityDef {
    fn from(v: f64) -> Self {
        Self::Value(v)
    }
}

impl From<&str> for QuantityDef {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}
