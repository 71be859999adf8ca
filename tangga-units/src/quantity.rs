//! Quantity type - a value with an associated unit

use std::fmt;
use serde::Serialize;
use crate::{Domain, Unit};
use crate::convert::convert_units;
use crate::unit::ConversionError;
use crate::units::UNITS;

/// A measured value on one of the unit ladders
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quantity {
    /// The domain the unit belongs to
    pub domain: Domain,
    /// The unit of measurement
    #[serde(serialize_with = "unit_name")]
    pub unit: &'static Unit,
    /// The numeric value
    pub value: f64,
}

fn unit_name<S: serde::Serializer>(unit: &&'static Unit, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(unit.name)
}

impl Quantity {
    /// Create a quantity, checking that the unit exists in the domain
    pub fn new(domain: Domain, unit: &str, value: f64) -> Result<Self, ConversionError> {
        let unit = UNITS.unit(domain, unit)?;
        Ok(Quantity { domain, unit, value })
    }

    /// Convert to another unit of the same domain
    pub fn convert_to(&self, target: &str) -> Result<Quantity, ConversionError> {
        let target = UNITS.unit(self.domain, target)?;
        Ok(Quantity {
            domain: self.domain,
            unit: target,
            value: convert_units(self.unit, target, self.value),
        })
    }

    /// Express the quantity in the domain's base unit
    pub fn to_base(&self) -> Quantity {
        // The base unit is always registered.
        match UNITS.get(self.domain, self.domain.base_unit()) {
            Some(base) => Quantity {
                domain: self.domain,
                unit: base,
                value: self.unit.to_base(self.value),
            },
            None => *self,
        }
    }

    /// The value in base units
    pub fn base_value(&self) -> f64 {
        self.unit.to_base(self.value)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.name)
    }
}
