//! Constant-heat-capacity reference-state thermo for a single species.
//!
//! ```text
//! cp°(T) = cp0
//! h°(T)  = h0 + cp0 (T - t0)
//! s°(T)  = s0 + cp0 ln(T / t0)
//! ```

use fc_core::units::constants::{GAS_CONSTANT, ONE_ATM};
use fc_core::{Quantity, ensure_finite, ensure_positive};
use fc_project::{QuantityDef, SpeciesThermoDef};

use crate::error::{ThermoError, ThermoResult};

/// Model names accepted for a constant-cp species thermo block.
const CONST_CP_ALIASES: [&str; 3] = ["const_cp", "constant_cp", "Simple"];

/// Dimensionless reference-state properties of one species at one temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceProperties {
    /// cp°/R
    pub cp_r: f64,
    /// h°/RT
    pub h_rt: f64,
    /// s°/R
    pub s_r: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstCpThermo {
    /// Reference temperature [K]
    t0: f64,
    /// Enthalpy at t0 [J/mol]
    h0: f64,
    /// Entropy at t0 [J/(mol·K)]
    s0: f64,
    /// Heat capacity [J/(mol·K)]
    cp0: f64,
    t_min: f64,
    t_max: f64,
    /// Reference pressure [Pa]
    p_ref: f64,
}

impl ConstCpThermo {
    /// Build from a coefficient array `[t0, h0, s0, cp0]` and validity bounds.
    pub fn new(t_min: f64, t_max: f64, p_ref: f64, coeffs: [f64; 4]) -> ThermoResult<Self> {
        let [t0, h0, s0, cp0] = coeffs;
        let thermo = Self {
            t0: ensure_positive(t0, "reference temperature t0")?,
            h0: ensure_finite(h0, "reference enthalpy h0")?,
            s0: ensure_finite(s0, "reference entropy s0")?,
            cp0: ensure_finite(cp0, "heat capacity cp0")?,
            t_min: ensure_positive(t_min, "minimum temperature")?,
            t_max: ensure_positive(t_max, "maximum temperature")?,
            p_ref: ensure_positive(p_ref, "reference pressure")?,
        };
        if thermo.t_min >= thermo.t_max {
            return Err(ThermoError::config(
                "ConstCpThermo::new",
                format!(
                    "temperature range [{}, {}] is empty",
                    thermo.t_min, thermo.t_max
                ),
            ));
        }
        Ok(thermo)
    }

    /// Build from a species `thermo` block of a phase document.
    pub fn from_def(def: &SpeciesThermoDef) -> ThermoResult<Self> {
        if !CONST_CP_ALIASES.contains(&def.model.as_str()) {
            return Err(ThermoError::config(
                "ConstCpThermo::from_def",
                format!(
                    "species thermo model '{}' is not one of {}",
                    def.model,
                    CONST_CP_ALIASES.join(", ")
                ),
            ));
        }
        let opt = |q: &Option<QuantityDef>, quantity: Quantity, default: f64| -> ThermoResult<f64> {
            Ok(match q {
                Some(q) => q.to_si(quantity)?,
                None => default,
            })
        };
        Self::new(
            opt(&def.t_min, Quantity::Temperature, 0.1)?,
            opt(&def.t_max, Quantity::Temperature, 1e30)?,
            opt(&def.p_ref, Quantity::Pressure, ONE_ATM)?,
            [
                def.t0.to_si(Quantity::Temperature)?,
                def.h0.to_si(Quantity::MolarEnergy)?,
                def.s0.to_si(Quantity::MolarEntropy)?,
                def.cp0.to_si(Quantity::MolarEntropy)?,
            ],
        )
    }

    /// Evaluate the reference properties at temperature `t` [K].
    ///
    /// Temperatures outside `[t_min, t_max]` are evaluated anyway; callers
    /// that care can check [`Self::covers`].
    pub fn evaluate(&self, t: f64) -> ReferenceProperties {
        let rt = GAS_CONSTANT * t;
        let h = self.h0 + self.cp0 * (t - self.t0);
        let s = self.s0 + self.cp0 * (t / self.t0).ln();
        ReferenceProperties {
            cp_r: self.cp0 / GAS_CONSTANT,
            h_rt: h / rt,
            s_r: s / GAS_CONSTANT,
        }
    }

    pub fn covers(&self, t: f64) -> bool {
        (self.t_min..=self.t_max).contains(&t)
    }

    pub fn reference_temperature(&self) -> f64 {
        self.t0
    }

    pub fn reference_pressure(&self) -> f64 {
        self.p_ref
    }

    pub fn min_temp(&self) -> f64 {
        self.t_min
    }

    pub fn max_temp(&self) -> f64 {
        self.t_max
    }
}
