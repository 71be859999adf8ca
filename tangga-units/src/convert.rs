//! Value conversion between units of one domain
//!
//! `convert` computes `value * factor(from) / factor(to)`. No range checks
//! and no rounding: negative input yields negative output, and rounding for
//! display belongs to the caller.

use tracing::debug;
use crate::{Domain, Unit};
use crate::unit::ConversionError;
use crate::units::UNITS;

/// Convert `value` from one unit to another within `domain`
pub fn convert(domain: Domain, from: &str, to: &str, value: f64) -> Result<f64, ConversionError> {
    let from_unit = UNITS.unit(domain, from)?;
    let to_unit = UNITS.unit(domain, to)?;
    let result = convert_units(from_unit, to_unit, value);
    debug!(%domain, from, to, value, result, "converted");
    Ok(result)
}

/// Convert between two already-resolved units of the same domain
///
/// Converting a unit to itself returns `value` unchanged.
pub fn convert_units(from: &Unit, to: &Unit, value: f64) -> f64 {
    if from.name == to.name {
        return value;
    }
    value * from.factor / to.factor
}

/// Convert a value in `unit` to the domain's base unit
pub fn to_base(domain: Domain, unit: &str, value: f64) -> Result<f64, ConversionError> {
    UNITS.unit(domain, unit).map(|u| u.to_base(value))
}

/// Convert a base-unit value into `unit`
pub fn from_base(domain: Domain, unit: &str, value_base: f64) -> Result<f64, ConversionError> {
    UNITS.unit(domain, unit).map(|u| u.from_base(value_base))
}
