//! fc-core: shared foundation for the fixed-chemical-potential phase workspace.
//!
//! Contains:
//! - units (uom SI types, constructors, physical constants, unit-annotated text parsing)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::constants::{GAS_CONSTANT, ONE_ATM, ONE_BAR, T_STANDARD};
pub use units::{Pressure, Quantity, Temperature, UnitError, parse_quantity};
