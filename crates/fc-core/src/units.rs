//! SI unit aliases, physical constants and unit-annotated value parsing.
//!
//! Phase documents carry quantities either as bare numbers (already SI) or as
//! `"value unit"` text such as `"-261 kJ/mol"` or `"1 atm"`. [`parse_quantity`]
//! is the single place that text is normalized to the SI unit of its
//! [`Quantity`] family:
//!
//! | Quantity | SI unit |
//! |---|---|
//! | Temperature | K |
//! | Pressure | Pa |
//! | MolarEnergy | J/mol |
//! | MolarEntropy | J/(mol·K) |
//! | Dimensionless | 1 |

use std::fmt;

use thiserror::Error;
use uom::si::f64::{Pressure as UomPressure, ThermodynamicTemperature as UomTemperature};
use uom::si::pressure::{atmosphere, bar, kilopascal, megapascal, pascal, torr};
use uom::si::thermodynamic_temperature::{
    degree_celsius, degree_fahrenheit, degree_rankine, kelvin,
};

// Public canonical unit types (SI, f64)
pub type Pressure = UomPressure;
pub type Temperature = UomTemperature;

#[inline]
pub fn pa(v: f64) -> Pressure {
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    Temperature::new::<kelvin>(v)
}

/// Pressure in Pa.
#[inline]
pub fn pressure_pa(p: Pressure) -> f64 {
    p.get::<pascal>()
}

/// Temperature in K.
#[inline]
pub fn temperature_k(t: Temperature) -> f64 {
    t.get::<kelvin>()
}

pub mod constants {
    use super::*;

    /// Molar gas constant [J/(mol·K)]
    pub const GAS_CONSTANT: f64 = 8.314_462_618;

    /// Standard atmosphere [Pa]
    pub const ONE_ATM: f64 = 101_325.0;

    /// One bar [Pa]
    pub const ONE_BAR: f64 = 1.0e5;

    /// Standard reference temperature [K]
    pub const T_STANDARD: f64 = 298.15;

    /// Faraday constant [C/mol], used to convert eV per particle to J/mol.
    pub const FARADAY: f64 = 96_485.332_12;

    #[inline]
    pub fn standard_pressure() -> Pressure {
        pa(ONE_ATM)
    }

    #[inline]
    pub fn standard_temperature() -> Temperature {
        k(T_STANDARD)
    }
}

/// Dimension/quantity family for a parsed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// Absolute temperature (canonical: K)
    Temperature,
    /// Absolute pressure (canonical: Pa)
    Pressure,
    /// Molar energy: enthalpy, Gibbs energy, chemical potential (canonical: J/mol)
    MolarEnergy,
    /// Molar entropy or heat capacity (canonical: J/(mol·K))
    MolarEntropy,
    /// Plain number
    Dimensionless,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature => write!(f, "Temperature"),
            Self::Pressure => write!(f, "Pressure"),
            Self::MolarEnergy => write!(f, "Molar Energy"),
            Self::MolarEntropy => write!(f, "Molar Entropy"),
            Self::Dimensionless => write!(f, "Dimensionless"),
        }
    }
}

/// Error in unit parsing or conversion.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    /// Input text did not parse to a number + optional unit
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Unit not recognized for this quantity
    #[error("Unknown unit '{unit}' for {quantity}")]
    UnknownUnit { unit: String, quantity: Quantity },
    /// Value out of physical range (e.g., non-positive absolute temperature)
    #[error("Value {value} out of range: {reason}")]
    OutOfRange { value: f64, reason: &'static str },
}

/// Parse a quantity value from unit-annotated text and convert it to SI.
///
/// A value without a unit is taken to be SI already.
pub fn parse_quantity(raw_text: &str, quantity: Quantity) -> Result<f64, UnitError> {
    let trimmed = raw_text.trim();

    match quantity {
        Quantity::Temperature => parse_temperature(trimmed),
        Quantity::Pressure => parse_pressure(trimmed),
        Quantity::MolarEnergy => parse_molar_energy(trimmed),
        Quantity::MolarEntropy => parse_molar_entropy(trimmed),
        Quantity::Dimensionless => parse_dimensionless(trimmed),
    }
}

/// Parse temperature, return Kelvin.
fn parse_temperature(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    let t = match unit.to_lowercase().as_str() {
        "" | "k" | "kelvin" => Temperature::new::<kelvin>(value),
        "c" | "°c" | "celsius" => Temperature::new::<degree_celsius>(value),
        "f" | "°f" | "fahrenheit" => Temperature::new::<degree_fahrenheit>(value),
        "r" | "°r" | "rankine" => Temperature::new::<degree_rankine>(value),
        _ => return Err(unknown(unit, Quantity::Temperature)),
    };

    let t_k = temperature_k(t);
    if t_k <= 0.0 {
        return Err(UnitError::OutOfRange {
            value: t_k,
            reason: "absolute temperature must be > 0 K",
        });
    }

    Ok(t_k)
}

/// Parse absolute pressure, return Pa.
fn parse_pressure(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    let p = match unit.to_lowercase().as_str() {
        "" | "pa" | "pascal" => Pressure::new::<pascal>(value),
        "kpa" => Pressure::new::<kilopascal>(value),
        "mpa" => Pressure::new::<megapascal>(value),
        "bar" => Pressure::new::<bar>(value),
        "atm" => Pressure::new::<atmosphere>(value),
        "torr" => Pressure::new::<torr>(value),
        _ => return Err(unknown(unit, Quantity::Pressure)),
    };

    let p = pressure_pa(p);
    if p < 0.0 {
        return Err(UnitError::OutOfRange {
            value: p,
            reason: "absolute pressure cannot be negative",
        });
    }

    Ok(p)
}

/// Parse molar energy, return J/mol.
fn parse_molar_energy(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    let factor = match unit.to_lowercase().as_str() {
        "" | "j/mol" | "j/gmol" => 1.0,
        "kj/mol" | "kj/gmol" => 1e3,
        "j/kmol" => 1e-3,
        "kj/kmol" => 1.0,
        "cal/mol" | "cal/gmol" => 4.184,
        "kcal/mol" | "kcal/gmol" => 4_184.0,
        "ev" => constants::FARADAY,
        _ => return Err(unknown(unit, Quantity::MolarEnergy)),
    };

    Ok(value * factor)
}

/// Parse molar entropy or molar heat capacity, return J/(mol·K).
fn parse_molar_entropy(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    let normalized: String = unit
        .to_lowercase()
        .chars()
        .map(|c| match c {
            '·' | '*' | '-' | ' ' => '/',
            other => other,
        })
        .filter(|c| *c != '(' && *c != ')')
        .collect();

    let factor = match normalized.as_str() {
        "" | "j/mol/k" | "j/gmol/k" => 1.0,
        "kj/mol/k" | "kj/gmol/k" => 1e3,
        "j/kmol/k" => 1e-3,
        "kj/kmol/k" => 1.0,
        "cal/mol/k" | "cal/gmol/k" => 4.184,
        "kcal/mol/k" | "kcal/gmol/k" => 4_184.0,
        _ => return Err(unknown(unit, Quantity::MolarEntropy)),
    };

    Ok(value * factor)
}

fn parse_dimensionless(input: &str) -> Result<f64, UnitError> {
    input
        .parse()
        .map_err(|_| UnitError::ParseError(format!("Could not parse number from '{}'", input)))
}

fn unknown(unit: String, quantity: Quantity) -> UnitError {
    UnitError::UnknownUnit { unit, quantity }
}

/// Split a value+unit string into (numeric_value, unit_string).
///
/// Examples:
/// - "298.15K" -> (298.15, "K")
/// - "-261 kJ/mol" -> (-261.0, "kJ/mol")
/// - "1.5e3" -> (1500.0, "")
/// - "1eV" -> (1.0, "eV")
fn split_value_and_unit(input: &str) -> Result<(f64, String), UnitError> {
    let trimmed = input.trim();

    let (num_part, unit_part) = trimmed.split_at(numeric_prefix_len(trimmed));
    let num_part = num_part.trim();
    let unit_part = unit_part.trim();

    let value: f64 = num_part.parse().map_err(|_| {
        UnitError::ParseError(format!("Could not parse numeric value from '{}'", input))
    })?;

    Ok((value, unit_part.to_string()))
}

/// Length of the leading number in `text`.
///
/// A sign counts only at the start or right after an exponent marker, and
/// `e`/`E` counts only when an exponent (optionally signed) follows it.
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let is_digit = |i: usize| bytes.get(i).is_some_and(u8::is_ascii_digit);

    let mut i = 0;
    while i < bytes.len() {
        let numeric = match bytes[i] {
            b'0'..=b'9' | b'.' => true,
            b'+' | b'-' => i == 0 || matches!(bytes[i - 1], b'e' | b'E'),
            b'e' | b'E' => {
                is_digit(i + 1) || (matches!(bytes.get(i + 1), Some(b'+' | b'-')) && is_digit(i + 2))
            }
            _ => false,
        };
        if !numeric {
            break;
        }
        i += 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Tolerances, nearly_equal};
    use constants::ONE_ATM;

    fn close(a: f64, b: f64) -> bool {
        nearly_equal(a, b, Tolerances::default())
    }

    #[test]
    fn constructors_smoke() {
        assert!(close(pressure_pa(constants::standard_pressure()), ONE_ATM));
        assert!(close(temperature_k(constants::standard_temperature()), 298.15));
        assert!(close(pressure_pa(pa(5.0)), 5.0));
        assert!(close(temperature_k(k(400.0)), 400.0));
    }

    #[test]
    fn parse_kelvin_and_celsius() {
        assert_eq!(parse_quantity("300 K", Quantity::Temperature).unwrap(), 300.0);
        assert_eq!(parse_quantity("300", Quantity::Temperature).unwrap(), 300.0);
        let c25 = parse_quantity("25 C", Quantity::Temperature).unwrap();
        assert!(close(c25, 298.15));
    }

    #[test]
    fn reject_non_positive_temperature() {
        assert!(matches!(
            parse_quantity("-10 K", Quantity::Temperature),
            Err(UnitError::OutOfRange { .. })
        ));
    }

    #[test]
    fn parse_pressure_units() {
        assert_eq!(parse_quantity("101325 Pa", Quantity::Pressure).unwrap(), 101_325.0);
        assert!(close(parse_quantity("1 bar", Quantity::Pressure).unwrap(), 1e5));
        assert!(close(parse_quantity("1 atm", Quantity::Pressure).unwrap(), ONE_ATM));
        assert!(close(parse_quantity("2 kPa", Quantity::Pressure).unwrap(), 2_000.0));
    }

    #[test]
    fn parse_molar_energy_units() {
        assert_eq!(
            parse_quantity("-500000", Quantity::MolarEnergy).unwrap(),
            -500_000.0
        );
        assert!(close(
            parse_quantity("-261 kJ/mol", Quantity::MolarEnergy).unwrap(),
            -261_000.0
        ));
        assert!(close(
            parse_quantity("1 kcal/mol", Quantity::MolarEnergy).unwrap(),
            4_184.0
        ));
        assert!(close(
            parse_quantity("-2.61e8 J/kmol", Quantity::MolarEnergy).unwrap(),
            -261_000.0
        ));
        for text in ["1 eV", "1eV", "1 ev"] {
            assert!(close(
                parse_quantity(text, Quantity::MolarEnergy).unwrap(),
                constants::FARADAY
            ));
        }
        assert!(close(
            parse_quantity("-2.5e-1eV", Quantity::MolarEnergy).unwrap(),
            -0.25 * constants::FARADAY
        ));
        assert!(close(
            parse_quantity("2E+2 J/mol", Quantity::MolarEnergy).unwrap(),
            200.0
        ));
    }

    #[test]
    fn exponent_marker_needs_an_exponent() {
        assert_eq!(split_value_and_unit("1eV").unwrap(), (1.0, "eV".to_string()));
        assert_eq!(split_value_and_unit("1e3K").unwrap(), (1000.0, "K".to_string()));
        assert_eq!(split_value_and_unit("1e-3 J/mol").unwrap(), (1e-3, "J/mol".to_string()));
        assert_eq!(split_value_and_unit("5E").unwrap(), (5.0, "E".to_string()));
        assert_eq!(split_value_and_unit("2 J/mol-K").unwrap(), (2.0, "J/mol-K".to_string()));
    }

    #[test]
    fn parse_molar_entropy_spellings() {
        for text in ["51.3 J/mol/K", "51.3 J/(mol·K)", "51.3 J/(mol*K)", "51.3 J/mol-K"] {
            assert!(close(
                parse_quantity(text, Quantity::MolarEntropy).unwrap(),
                51.3
            ));
        }
        assert!(close(
            parse_quantity("1 cal/gmol/K", Quantity::MolarEntropy).unwrap(),
            4.184
        ));
    }

    #[test]
    fn unknown_unit_names_the_quantity() {
        let err = parse_quantity("3 furlongs", Quantity::MolarEnergy).unwrap_err();
        assert_eq!(
            err,
            UnitError::UnknownUnit {
                unit: "furlongs".to_string(),
                quantity: Quantity::MolarEnergy
            }
        );
        assert!(err.to_string().contains("Molar Energy"));
    }

    #[test]
    fn garbage_is_a_parse_error() {
        assert!(matches!(
            parse_quantity("abc", Quantity::Dimensionless),
            Err(UnitError::ParseError(_))
        ));
        assert!(matches!(
            parse_quantity("J/mol", Quantity::MolarEnergy),
            Err(UnitError::ParseError(_))
        ));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::{Tolerances, nearly_equal};
    use proptest::prelude::*;

    fn close(a: f64, b: f64) -> bool {
        nearly_equal(a, b, Tolerances::default())
    }

    proptest! {
        #[test]
        fn molar_energy_units_scale(v in -1.0e7_f64..1.0e7) {
            for (unit, factor) in [
                ("J/mol", 1.0),
                ("kJ/mol", 1e3),
                ("J/kmol", 1e-3),
                ("kJ/kmol", 1.0),
                ("cal/mol", 4.184),
                ("kcal/gmol", 4_184.0),
                ("eV", constants::FARADAY),
            ] {
                let parsed = parse_quantity(&format!("{} {}", v, unit), Quantity::MolarEnergy).unwrap();
                prop_assert!(close(parsed, v * factor), "{} {}: {}", v, unit, parsed);
            }
        }

        #[test]
        fn molar_entropy_units_scale(v in -1.0e4_f64..1.0e4) {
            for (unit, factor) in [("J/mol/K", 1.0), ("kJ/mol/K", 1e3), ("J/kmol/K", 1e-3), ("cal/mol/K", 4.184)] {
                let parsed = parse_quantity(&format!("{} {}", v, unit), Quantity::MolarEntropy).unwrap();
                prop_assert!(close(parsed, v * factor));
            }
        }

        #[test]
        fn kelvin_text_round_trips(t in 1.0e-3_f64..1.0e5) {
            let parsed = parse_quantity(&format!("{}K", t), Quantity::Temperature).unwrap();
            prop_assert!(close(parsed, t));
            prop_assert!(close(temperature_k(k(parsed)), t));
        }

        #[test]
        fn pressure_units_agree_with_uom(p in 0.0_f64..1.0e3) {
            let bar_text = parse_quantity(&format!("{} bar", p), Quantity::Pressure).unwrap();
            prop_assert!(close(bar_text, p * constants::ONE_BAR));
            let atm_text = parse_quantity(&format!("{} atm", p), Quantity::Pressure).unwrap();
            prop_assert!(close(atm_text, p * constants::ONE_ATM));
        }

        #[test]
        fn scientific_notation_is_numeric(m in 1.0_f64..10.0, e in -5_i32..5) {
            let parsed = parse_quantity(&format!("{}e{} J/mol", m, e), Quantity::MolarEnergy).unwrap();
            prop_assert!(close(parsed, m * 10f64.powi(e)));
        }
    }
}
