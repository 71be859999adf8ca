//! Tangga Units - metric unit ladders and conversion
//!
//! Two domains, each a fixed ladder of metric-prefixed units related by
//! powers of ten:
//! - Length: km, hm, dam, m, dm, cm, mm (base: m)
//! - Mass: kg, hg (ons), dag, g, dg, cg, mg (base: g)
//!
//! The table is immutable and safe to read from any thread.

mod domain;
mod unit;
mod units;
mod convert;
mod quantity;
mod parse;
mod ladder;
mod compare;

pub use domain::Domain;
pub use unit::{Unit, ConversionError};
pub use units::{UnitTable, UNITS};
pub use convert::{convert, convert_units, to_base, from_base};
pub use quantity::Quantity;
pub use parse::{parse_quantity, parse_conversion, resolve_unit};
pub use ladder::{ladder_move, rungs, LadderMove, Rung};
pub use compare::{bands, classify, compare, Band, Comparison};

/// Unit names of a domain in ladder order
pub fn units_of(domain: Domain) -> Vec<&'static str> {
    UNITS.units_of(domain)
}

/// Factor of `unit` relative to the domain's base unit
pub fn factor_of(domain: Domain, unit: &str) -> Result<f64, ConversionError> {
    UNITS.factor_of(domain, unit)
}
