//! Phase construction and configuration errors.

use fc_core::{CoreError, UnitError};
use fc_project::ProjectError;
use thiserror::Error;

/// Result type for phase operations.
pub type ThermoResult<T> = Result<T, ThermoError>;

/// Errors that can occur while building or configuring a phase.
///
/// Property accessors never fail; every variant here comes from a
/// construction or configuration path.
#[derive(Error, Debug)]
pub enum ThermoError {
    /// Bad or missing configuration, tagged with the method that rejected it.
    #[error("{method}: {reason}")]
    Config { method: &'static str, reason: String },

    /// Element symbol not present in the element table.
    #[error("Unknown element: {symbol}")]
    UnknownElement { symbol: String },

    /// Species referenced but not defined.
    #[error("Unknown species: {name}")]
    UnknownSpecies { name: String },

    /// Malformed composition string or composition inconsistent with the phase.
    #[error("Invalid composition '{text}': {reason}")]
    Composition { text: String, reason: String },

    /// Operation needs an initialized species.
    #[error("Phase has no species installed")]
    NotInitialized,

    #[error("Unit error: {0}")]
    Unit(#[from] UnitError),

    #[error("Numeric error: {0}")]
    Numeric(#[from] CoreError),

    #[error("Document error: {0}")]
    Project(#[from] ProjectError),
}

impl ThermoError {
    pub(crate) fn config(method: &'static str, reason: impl Into<String>) -> Self {
        Self::Config {
            method,
            reason: reason.into(),
        }
    }
}
