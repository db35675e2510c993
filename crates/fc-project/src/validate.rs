//! Document validation logic.

use crate::schema::{PhaseDef, PhaseDocument};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Document defines no phases")]
    NoPhases,

    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// Structural checks only: ids, names and cross references.
///
/// Model names and quantity units are checked when a phase is built, so an
/// unknown `thermo.model` passes here.
pub fn validate_document(doc: &PhaseDocument) -> Result<(), ValidationError> {
    if doc.phases.is_empty() {
        return Err(ValidationError::NoPhases);
    }

    let mut species_names = HashSet::new();
    for species in &doc.species {
        if species.name.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "species.name".to_string(),
                value: species.name.clone(),
                reason: "must not be empty".to_string(),
            });
        }
        if !species_names.insert(species.name.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: species.name.clone(),
                context: "species".to_string(),
            });
        }
    }

    let mut phase_ids = HashSet::new();
    for phase in &doc.phases {
        if !phase_ids.insert(phase.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: phase.id.clone(),
                context: "phases".to_string(),
            });
        }
        validate_phase(phase, &species_names)?;
    }

    Ok(())
}

fn validate_phase(phase: &PhaseDef, species_names: &HashSet<&str>) -> Result<(), ValidationError> {
    if phase.id.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "phase.id".to_string(),
            value: phase.id.clone(),
            reason: "must not be empty".to_string(),
        });
    }

    let mut elements = HashSet::new();
    for element in &phase.elements {
        if !elements.insert(element.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: element.clone(),
                context: format!("phase '{}' elements", phase.id),
            });
        }
    }

    for name in &phase.species {
        if !species_names.contains(name.as_str()) {
            return Err(ValidationError::MissingReference {
                id: name.clone(),
                context: format!("phase '{}' species", phase.id),
            });
        }
    }

    Ok(())
}
