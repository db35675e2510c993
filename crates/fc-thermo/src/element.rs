//! Chemical element table.

use crate::error::{ThermoError, ThermoResult};

/// A chemical element known to the phase framework.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    pub symbol: &'static str,
    pub name: &'static str,
    /// Atomic weight [kg/kmol]
    pub atomic_weight: f64,
}

const fn el(symbol: &'static str, name: &'static str, atomic_weight: f64) -> Element {
    Element {
        symbol,
        name,
        atomic_weight,
    }
}

/// Standard atomic weights (IUPAC conventional values; mass number of the
/// longest-lived isotope for elements without a stable one).
pub const ELEMENTS: [Element; 121] = [
    el("H", "hydrogen", 1.008),
    el("He", "helium", 4.002_602),
    el("Li", "lithium", 6.94),
    el("Be", "beryllium", 9.012_183_1),
    el("B", "boron", 10.81),
    el("C", "carbon", 12.011),
    el("N", "nitrogen", 14.007),
    el("O", "oxygen", 15.999),
    el("F", "fluorine", 18.998_403_163),
    el("Ne", "neon", 20.1797),
    el("Na", "sodium", 22.989_769_28),
    el("Mg", "magnesium", 24.305),
    el("Al", "aluminum", 26.981_538_5),
    el("Si", "silicon", 28.085),
    el("P", "phosphorus", 30.973_761_998),
    el("S", "sulfur", 32.06),
    el("Cl", "chlorine", 35.45),
    el("Ar", "argon", 39.948),
    el("K", "potassium", 39.0983),
    el("Ca", "calcium", 40.078),
    el("Sc", "scandium", 44.955_908),
    el("Ti", "titanium", 47.867),
    el("V", "vanadium", 50.9415),
    el("Cr", "chromium", 51.9961),
    el("Mn", "manganese", 54.938_044),
    el("Fe", "iron", 55.845),
    el("Co", "cobalt", 58.933_194),
    el("Ni", "nickel", 58.6934),
    el("Cu", "copper", 63.546),
    el("Zn", "zinc", 65.38),
    el("Ga", "gallium", 69.723),
    el("Ge", "germanium", 72.630),
    el("As", "arsenic", 74.921_595),
    el("Se", "selenium", 78.971),
    el("Br", "bromine", 79.904),
    el("Kr", "krypton", 83.798),
    el("Rb", "rubidium", 85.4678),
    el("Sr", "strontium", 87.62),
    el("Y", "yttrium", 88.905_84),
    el("Zr", "zirconium", 91.224),
    el("Nb", "niobium", 92.906_37),
    el("Mo", "molybdenum", 95.95),
    el("Tc", "technetium", 97.0),
    el("Ru", "ruthenium", 101.07),
    el("Rh", "rhodium", 102.905_50),
    el("Pd", "palladium", 106.42),
    el("Ag", "silver", 107.8682),
    el("Cd", "cadmium", 112.414),
    el("In", "indium", 114.818),
    el("Sn", "tin", 118.710),
    el("Sb", "antimony", 121.760),
    el("Te", "tellurium", 127.60),
    el("I", "iodine", 126.904_47),
    el("Xe", "xenon", 131.293),
    el("Cs", "cesium", 132.905_451_96),
    el("Ba", "barium", 137.327),
    el("La", "lanthanum", 138.905_47),
    el("Ce", "cerium", 140.116),
    el("Pr", "praseodymium", 140.907_66),
    el("Nd", "neodymium", 144.242),
    el("Pm", "promethium", 145.0),
    el("Sm", "samarium", 150.36),
    el("Eu", "europium", 151.964),
    el("Gd", "gadolinium", 157.25),
    el("Tb", "terbium", 158.925_35),
    el("Dy", "dysprosium", 162.500),
    el("Ho", "holmium", 164.930_33),
    el("Er", "erbium", 167.259),
    el("Tm", "thulium", 168.934_22),
    el("Yb", "ytterbium", 173.045),
    el("Lu", "lutetium", 174.9668),
    el("Hf", "hafnium", 178.49),
    el("Ta", "tantalum", 180.947_88),
    el("W", "tungsten", 183.84),
    el("Re", "rhenium", 186.207),
    el("Os", "osmium", 190.23),
    el("Ir", "iridium", 192.217),
    el("Pt", "platinum", 195.084),
    el("Au", "gold", 196.966_569),
    el("Hg", "mercury", 200.592),
    el("Tl", "thallium", 204.38),
    el("Pb", "lead", 207.2),
    el("Bi", "bismuth", 208.980_40),
    el("Po", "polonium", 209.0),
    el("At", "astatine", 210.0),
    el("Rn", "radon", 222.0),
    el("Fr", "francium", 223.0),
    el("Ra", "radium", 226.0),
    el("Ac", "actinium", 227.0),
    el("Th", "thorium", 232.0377),
    el("Pa", "protactinium", 231.035_88),
    el("U", "uranium", 238.028_91),
    el("Np", "neptunium", 237.0),
    el("Pu", "plutonium", 244.0),
    el("Am", "americium", 243.0),
    el("Cm", "curium", 247.0),
    el("Bk", "berkelium", 247.0),
    el("Cf", "californium", 251.0),
    el("Es", "einsteinium", 252.0),
    el("Fm", "fermium", 257.0),
    el("Md", "mendelevium", 258.0),
    el("No", "nobelium", 259.0),
    el("Lr", "lawrencium", 262.0),
    el("Rf", "rutherfordium", 267.0),
    el("Db", "dubnium", 268.0),
    el("Sg", "seaborgium", 269.0),
    el("Bh", "bohrium", 270.0),
    el("Hs", "hassium", 269.0),
    el("Mt", "meitnerium", 278.0),
    el("Ds", "darmstadtium", 281.0),
    el("Rg", "roentgenium", 282.0),
    el("Cn", "copernicium", 285.0),
    el("Nh", "nihonium", 286.0),
    el("Fl", "flerovium", 289.0),
    el("Mc", "moscovium", 290.0),
    el("Lv", "livermorium", 293.0),
    el("Ts", "tennessine", 294.0),
    el("Og", "oganesson", 294.0),
    // Isotopes and the electron
    el("D", "deuterium", 2.014_101_778_1),
    el("Tr", "tritium", 3.016_049_282),
    el("E", "electron", 5.485_799_090_65e-4),
];

impl Element {
    /// Look up an element by symbol.
    ///
    /// Exact matches win; otherwise the symbol is matched case-insensitively
    /// so that `"NA"` and `"na"` resolve to sodium.
    pub fn lookup(symbol: &str) -> ThermoResult<Element> {
        let symbol = symbol.trim();
        ELEMENTS
            .iter()
            .find(|e| e.symbol == symbol)
            .or_else(|| ELEMENTS.iter().find(|e| e.symbol.eq_ignore_ascii_case(symbol)))
            .copied()
            .ok_or_else(|| ThermoError::UnknownElement {
                symbol: symbol.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_sodium() {
        let na = Element::lookup("Na").unwrap();
        assert_eq!(na.name, "sodium");
        assert!((na.atomic_weight - 22.99).abs() < 0.01);
    }

    #[test]
    fn lookup_is_case_tolerant() {
        assert_eq!(Element::lookup("NA").unwrap().symbol, "Na");
        assert_eq!(Element::lookup(" si ").unwrap().symbol, "Si");
    }

    #[test]
    fn unknown_symbol_is_an_error() {
        assert!(matches!(
            Element::lookup("Xx"),
            Err(ThermoError::UnknownElement { symbol }) if symbol == "Xx"
        ));
    }

    #[test]
    fn covers_periodic_table_and_isotopes() {
        for symbol in ["Pd", "La", "Rh", "Bi", "Ta", "Sb", "In", "Th", "Og", "D", "Tr", "E"] {
            assert_eq!(Element::lookup(symbol).unwrap().symbol, symbol);
        }
        let d = Element::lookup("D").unwrap();
        assert!((d.atomic_weight - 2.014).abs() < 1e-3);
        assert_eq!(ELEMENTS.len(), 121);
    }

    #[test]
    fn case_insensitive_match_is_unambiguous() {
        for (i, a) in ELEMENTS.iter().enumerate() {
            for b in &ELEMENTS[i + 1..] {
                assert!(!a.symbol.eq_ignore_ascii_case(b.symbol), "{} / {}", a.symbol, b.symbol);
            }
        }
    }

    #[test]
    fn symbols_are_unique() {
        for (i, a) in ELEMENTS.iter().enumerate() {
            for b in &ELEMENTS[i + 1..] {
                assert_ne!(a.symbol, b.symbol);
            }
        }
    }
}
