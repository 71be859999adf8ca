//! Unit ladders for every domain
//!
//! Ladders are ordered from the largest unit to the smallest. Neighbouring
//! rungs differ by a factor of ten.

use crate::{Domain, Unit};
use crate::unit::ConversionError;

/// Global unit table
pub static UNITS: UnitTable = UnitTable {
    length: &LENGTH_LADDER,
    mass: &MASS_LADDER,
};

static LENGTH_LADDER: [Unit; 7] = [
    Unit::new("km", "kilometer", 1000.0),
    Unit::new("hm", "hectometer", 100.0),
    Unit::new("dam", "decameter", 10.0),
    Unit::new("m", "meter", 1.0),
    Unit::new("dm", "decimeter", 0.1),
    Unit::new("cm", "centimeter", 0.01),
    Unit::new("mm", "millimeter", 0.001),
];

static MASS_LADDER: [Unit; 7] = [
    Unit::new("kg", "kilogram", 1000.0),
    Unit::new("hg (ons)", "hectogram", 100.0),
    Unit::new("dag", "decagram", 10.0),
    Unit::new("g", "gram", 1.0),
    Unit::new("dg", "decigram", 0.1),
    Unit::new("cg", "centigram", 0.01),
    Unit::new("mg", "milligram", 0.001),
];

/// Read-only registry of unit ladders, one per domain
#[derive(Debug)]
pub struct UnitTable {
    length: &'static [Unit],
    mass: &'static [Unit],
}

impl UnitTable {
    pub fn new() -> Self {
        UnitTable {
            length: &LENGTH_LADDER,
            mass: &MASS_LADDER,
        }
    }

    /// The full ladder of a domain, largest unit first
    pub fn ladder(&self, domain: Domain) -> &'static [Unit] {
        match domain {
            Domain::Length => self.length,
            Domain::Mass => self.mass,
        }
    }

    /// Unit names of a domain in ladder order
    pub fn units_of(&self, domain: Domain) -> Vec<&'static str> {
        self.ladder(domain).iter().map(|u| u.name).collect()
    }

    /// Get a unit by exact name
    pub fn get(&self, domain: Domain, name: &str) -> Option<&'static Unit> {
        self.ladder(domain).iter().find(|u| u.name == name)
    }

    /// Get a unit by exact name, failing with `UnknownUnit`
    pub fn unit(&self, domain: Domain, name: &str) -> Result<&'static Unit, ConversionError> {
        self.get(domain, name)
            .ok_or_else(|| ConversionError::unknown_unit(domain, name))
    }

    /// Conversion factor of a unit relative to the domain's base unit
    pub fn factor_of(&self, domain: Domain, name: &str) -> Result<f64, ConversionError> {
        self.unit(domain, name).map(|u| u.factor)
    }

    /// Zero-based rung of a unit, counted from the top of the ladder
    pub fn position_of(&self, domain: Domain, name: &str) -> Result<usize, ConversionError> {
        self.ladder(domain)
            .iter()
            .position(|u| u.name == name)
            .ok_or_else(|| ConversionError::unknown_unit(domain, name))
    }

    /// Find the domain that registers a unit name
    pub fn domain_of(&self, name: &str) -> Option<Domain> {
        Domain::ALL.into_iter().find(|&d| self.get(d, name).is_some())
    }
}

impl Default for UnitTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ladder_order() {
        assert_eq!(
            UNITS.units_of(Domain::Length),
            vec!["km", "hm", "dam", "m", "dm", "cm", "mm"]
        );
        assert_eq!(
            UNITS.units_of(Domain::Mass),
            vec!["kg", "hg (ons)", "dag", "g", "dg", "cg", "mg"]
        );
    }

    #[test]
    fn test_base_factor_is_one() {
        for domain in Domain::ALL {
            assert_eq!(UNITS.factor_of(domain, domain.base_unit()).unwrap(), 1.0);
        }
    }

    #[test]
    fn test_factors_positive_and_descending() {
        for domain in Domain::ALL {
            let ladder = UNITS.ladder(domain);
            assert!(ladder.len() >= 2);
            for pair in ladder.windows(2) {
                assert!(pair[1].factor > 0.0);
                assert!(pair[0].factor > pair[1].factor);
            }
        }
    }

    #[test]
    fn test_names_unique_across_domains() {
        let mut names: Vec<&str> = Domain::ALL
            .into_iter()
            .flat_map(|d| UNITS.units_of(d))
            .collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_factor_of_unknown_unit() {
        let err = UNITS.factor_of(Domain::Length, "kg").unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnknownUnit { domain: Some(Domain::Length), unit: "kg".to_string() }
        );
    }

    #[test]
    fn test_position_of() {
        assert_eq!(UNITS.position_of(Domain::Length, "km").unwrap(), 0);
        assert_eq!(UNITS.position_of(Domain::Length, "m").unwrap(), 3);
        assert_eq!(UNITS.position_of(Domain::Mass, "mg").unwrap(), 6);
        assert!(UNITS.position_of(Domain::Mass, "m").is_err());
    }

    #[test]
    fn test_domain_of() {
        assert_eq!(UNITS.domain_of("dam"), Some(Domain::Length));
        assert_eq!(UNITS.domain_of("hg (ons)"), Some(Domain::Mass));
        assert_eq!(UNITS.domain_of("lb"), None);
    }

    #[test]
    fn test_unit_labels() {
        let hg = UNITS.unit(Domain::Mass, "hg (ons)").unwrap();
        assert_eq!(hg.label, "hectogram");
        assert_eq!(hg.factor, 100.0);
    }
}
