//! Elemental composition of a species.

use std::fmt;

use crate::error::{ThermoError, ThermoResult};

/// Element counts for one species, in the order they were given.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    items: Vec<(String, f64)>,
}

impl Composition {
    /// Composition of a species made of a single atom of `symbol`.
    pub fn single(symbol: &str) -> Self {
        Self {
            items: vec![(symbol.to_string(), 1.0)],
        }
    }

    /// Parse a composition string such as `"Na:1"` or `"Si:1 O:2"`.
    ///
    /// Entries are separated by whitespace or commas. Counts must be finite
    /// and positive; a repeated element is an error.
    pub fn parse(text: &str) -> ThermoResult<Self> {
        let invalid = |reason: &str| ThermoError::Composition {
            text: text.to_string(),
            reason: reason.to_string(),
        };

        let mut items: Vec<(String, f64)> = Vec::new();
        for entry in text.split(|c: char| c.is_whitespace() || c == ',') {
            if entry.is_empty() {
                continue;
            }
            let (symbol, count) = entry
                .split_once(':')
                .ok_or_else(|| invalid("expected 'Element:count'"))?;
            let symbol = symbol.trim();
            if symbol.is_empty() {
                return Err(invalid("missing element symbol"));
            }
            let count: f64 = count
                .trim()
                .parse()
                .map_err(|_| invalid("element count is not a number"))?;
            if !count.is_finite() || count <= 0.0 {
                return Err(invalid("element count must be positive and finite"));
            }
            if items.iter().any(|(s, _)| s == symbol) {
                return Err(invalid("element listed twice"));
            }
            items.push((symbol.to_string(), count));
        }

        if items.is_empty() {
            return Err(invalid("empty composition"));
        }
        Ok(Self { items })
    }

    /// Number of atoms of `symbol` (0.0 if absent).
    pub fn atoms(&self, symbol: &str) -> f64 {
        self.items
            .iter()
            .find(|(s, _)| s == symbol)
            .map(|(_, n)| *n)
            .unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.items.iter().map(|(s, n)| (s.as_str(), *n))
    }

    pub fn elements(&self) -> impl Iterator<Item = &str> + '_ {
        self.items.iter().map(|(s, _)| s.as_str())
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (symbol, count)) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}:{}", symbol, count)?;
        }
        Ok(())
    }
}
