//! Measurement domains
//!
//! Each domain owns exactly one unit ladder, ordered from the largest unit
//! to the smallest. All factors are relative to the domain's base unit.

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use crate::unit::ConversionError;

/// A measurement category with its own unit ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    /// Length, based on the meter
    Length,
    /// Mass, based on the gram
    Mass,
}

impl Domain {
    /// Every supported domain, in display order
    pub const ALL: [Domain; 2] = [Domain::Length, Domain::Mass];

    /// Lowercase domain name
    pub fn name(&self) -> &'static str {
        match self {
            Domain::Length => "length",
            Domain::Mass => "mass",
        }
    }

    /// Symbol of the unit with factor 1
    pub fn base_unit(&self) -> &'static str {
        match self {
            Domain::Length => "m",
            Domain::Mass => "g",
        }
    }

    /// Default (from, to) selection offered by a converter front end
    pub fn default_pair(&self) -> (&'static str, &'static str) {
        match self {
            Domain::Length => ("m", "cm"),
            Domain::Mass => ("kg", "g"),
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Domain {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "length" | "panjang" => Ok(Domain::Length),
            "mass" | "weight" | "berat" => Ok(Domain::Mass),
            _ => Err(ConversionError::InvalidDomain(s.to_string())),
        }
    }
}
