//! fc-thermo: single-species phase with a fixed molar chemical potential.
//!
//! Provides:
//! - Element table and elemental composition parsing
//! - Species definitions with constant-cp reference thermo
//! - `SingleSpeciesPhase` base state (identity, elements, T, P, reference arrays)
//! - `ThermoPhase` trait, the contract equilibrium solvers query
//! - `FixedChemPotPhase`, whose whole property set follows from one μ
//!
//! # Example
//!
//! ```
//! use fc_thermo::{FixedChemPotPhase, ThermoPhase};
//!
//! let phase = FixedChemPotPhase::from_element("Na", -261_000.0).unwrap();
//! assert_eq!(phase.name(), "NaFixed");
//! assert_eq!(phase.standard_chem_potentials(), vec![-261_000.0]);
//! assert_eq!(phase.entropy_r(), vec![0.0]);
//! ```

pub mod composition;
pub mod element;
pub mod error;
pub mod fixed_chem_pot;
pub mod model;
pub mod phase;
pub mod species;
pub mod species_thermo;

pub use composition::Composition;
pub use element::Element;
pub use error::{ThermoError, ThermoResult};
pub use fixed_chem_pot::{FixedChemPotPhase, ThermoModel, parse_chemical_potential};
pub use model::{EosType, PropertySnapshot, ThermoPhase};
pub use phase::{SingleSpeciesPhase, ThermoContext};
pub use species::Species;
pub use species_thermo::{ConstCpThermo, ReferenceProperties};
