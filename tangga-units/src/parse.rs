//! Text parsing - quantities like "5 km" and conversions like "km->m"

use crate::{Domain, Quantity};
use crate::unit::ConversionError;
use crate::units::UNITS;

/// Map common spellings onto registered unit names
fn canonical_unit(s: &str) -> &str {
    match s {
        "ons" | "hg" | "hg(ons)" => "hg (ons)",
        other => other,
    }
}

/// Resolve a unit name (or alias) to its domain and registered name
pub fn resolve_unit(s: &str) -> Result<(Domain, &'static str), ConversionError> {
    let name = canonical_unit(s.trim());
    let domain = UNITS
        .domain_of(name)
        .ok_or_else(|| ConversionError::unregistered_unit(s.trim()))?;
    let unit = UNITS.unit(domain, name)?;
    Ok((domain, unit.name))
}

/// Parse a quantity string like "5 km" or "2.5 hg (ons)"
///
/// The domain is inferred from the unit.
pub fn parse_quantity(s: &str) -> Result<Quantity, ConversionError> {
    let s = s.trim();

    let (number, unit) = s
        .split_once(char::is_whitespace)
        .ok_or_else(|| ConversionError::InvalidQuantity(format!("expected \"<value> <unit>\", got \"{}\"", s)))?;

    let value: f64 = number
        .trim()
        .parse()
        .map_err(|_| ConversionError::InvalidQuantity(format!("not a number: {}", number)))?;

    let (domain, name) = resolve_unit(unit)?;
    Quantity::new(domain, name, value)
}

/// Parse a conversion like "km->m" or "kg to g"
///
/// Both units must belong to the same domain; the source unit decides it.
pub fn parse_conversion(s: &str) -> Result<(Domain, &'static str, &'static str), ConversionError> {
    let (from, to) = s
        .split_once("->")
        .or_else(|| s.split_once(" to "))
        .ok_or_else(|| ConversionError::InvalidQuantity(format!("expected \"from->to\", got \"{}\"", s)))?;

    let (domain, from) = resolve_unit(from)?;
    let to = UNITS.unit(domain, canonical_unit(to.trim()))?;
    Ok((domain, from, to.name))
}
