//! Unit representation with conversion factors

use std::fmt;
use serde::Serialize;
use thiserror::Error;
use crate::Domain;

/// A named rung on a domain's unit ladder
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Unit {
    /// The unit name as shown on the ladder (e.g., "km", "hg (ons)")
    pub name: &'static str,
    /// Spelled-out label (e.g., "kilometer")
    pub label: &'static str,
    /// Base units per one of this unit (value_base = value * factor)
    pub factor: f64,
}

impl Unit {
    pub const fn new(name: &'static str, label: &'static str, factor: f64) -> Self {
        Unit { name, label, factor }
    }

    /// Check if this is the domain's base unit
    pub fn is_base(&self) -> bool {
        self.factor == 1.0
    }

    /// Convert a value in this unit to the base unit
    pub fn to_base(&self, value: f64) -> f64 {
        value * self.factor
    }

    /// Convert a base-unit value into this unit
    pub fn from_base(&self, value_base: f64) -> f64 {
        value_base / self.factor
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Errors that can occur during unit lookup and conversion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Unit name is not registered in the domain's ladder.
    /// `domain` is `None` when the name matched no ladder at all.
    #[error("unknown {}unit: {unit}", domain_prefix(.domain))]
    UnknownUnit { domain: Option<Domain>, unit: String },

    /// Domain name outside the supported set
    #[error("unknown domain: {0}")]
    InvalidDomain(String),

    /// Text could not be read as a quantity
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),
}

fn domain_prefix(domain: &Option<Domain>) -> String {
    domain.map(|d| format!("{} ", d)).unwrap_or_default()
}

impl ConversionError {
    pub(crate) fn unknown_unit(domain: Domain, unit: &str) -> Self {
        ConversionError::UnknownUnit { domain: Some(domain), unit: unit.to_string() }
    }

    /// A unit name found in no domain's ladder
    pub(crate) fn unregistered_unit(unit: &str) -> Self {
        ConversionError::UnknownUnit { domain: None, unit: unit.to_string() }
    }
}
