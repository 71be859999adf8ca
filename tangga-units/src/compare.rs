//! Magnitude bands for illustrative real-world comparisons
//!
//! A base-unit value is classified into the first band whose lower bound it
//! reaches. The last band of each domain has no lower bound, so every value
//! lands in exactly one band.

use serde::Serialize;
use crate::Domain;
use crate::unit::ConversionError;
use crate::units::UNITS;

/// A magnitude range paired with a reference object
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Band {
    /// Inclusive lower bound in base units (`-inf` for the catch-all band)
    pub min: f64,
    /// Size of one reference object in base units
    pub divisor: f64,
    /// What the value is compared against
    pub reference: &'static str,
}

const LENGTH_BANDS: [Band; 5] = [
    Band { min: 1000.0, divisor: 105.0, reference: "football pitch" },
    Band { min: 100.0, divisor: 10.0, reference: "school bus" },
    Band { min: 1.0, divisor: 1.7, reference: "adult's height" },
    Band { min: 0.01, divisor: 0.15, reference: "pen" },
    Band { min: f64::NEG_INFINITY, divisor: 0.01, reference: "black ant" },
];

const MASS_BANDS: [Band; 4] = [
    Band { min: 1_000_000.0, divisor: 1_000_000.0, reference: "small family car" },
    Band { min: 1000.0, divisor: 1000.0, reference: "thin laptop" },
    Band { min: 100.0, divisor: 150.0, reference: "fresh apple" },
    Band { min: f64::NEG_INFINITY, divisor: 5.0, reference: "coin" },
];

/// Bands of a domain, highest first
pub fn bands(domain: Domain) -> &'static [Band] {
    match domain {
        Domain::Length => &LENGTH_BANDS,
        Domain::Mass => &MASS_BANDS,
    }
}

/// Classify a base-unit value, returning the band index and the band
///
/// NaN falls through to the catch-all band.
pub fn classify(domain: Domain, base_value: f64) -> (usize, &'static Band) {
    let bands = bands(domain);
    let last = bands.len() - 1;
    let index = bands.iter().position(|b| base_value >= b.min).unwrap_or(last);
    (index, &bands[index])
}

/// A value expressed as a count of some familiar object
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub domain: Domain,
    pub band: usize,
    pub divisor: f64,
    pub reference: &'static str,
    /// `base_value / divisor`
    pub count: f64,
}

/// Compare a value given in `unit` with a reference object
pub fn compare(domain: Domain, unit: &str, value: f64) -> Result<Comparison, ConversionError> {
    let base_value = UNITS.unit(domain, unit)?.to_base(value);
    let (band, b) = classify(domain, base_value);
    Ok(Comparison {
        domain,
        band,
        divisor: b.divisor,
        reference: b.reference,
        count: base_value / b.divisor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_length_banding_each_band_once() {
        let picked: Vec<usize> = [1500.0, 150.0, 1.5, 0.015, 0.0005]
            .into_iter()
            .map(|v| classify(Domain::Length, v).0)
            .collect();
        assert_eq!(picked, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_length_band_boundaries_inclusive() {
        assert_eq!(classify(Domain::Length, 1000.0).0, 0);
        assert_eq!(classify(Domain::Length, 999.999).0, 1);
        assert_eq!(classify(Domain::Length, 0.01).0, 3);
        assert_eq!(classify(Domain::Length, 0.0).0, 4);
    }

    #[test]
    fn test_mass_banding() {
        assert_eq!(classify(Domain::Mass, 2_000_000.0).0, 0);
        assert_eq!(classify(Domain::Mass, 1000.0).0, 1);
        assert_eq!(classify(Domain::Mass, 150.0).0, 2);
        assert_eq!(classify(Domain::Mass, 99.0).0, 3);
    }

    #[test]
    fn test_nan_falls_into_last_band() {
        assert_eq!(classify(Domain::Length, f64::NAN).0, 4);
    }

    #[test]
    fn test_compare_car() {
        let c = compare(Domain::Mass, "kg", 1500.0).unwrap();
        assert_eq!(c.reference, "small family car");
        assert!((c.count - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_compare_converts_to_base_first() {
        let c = compare(Domain::Length, "km", 2.1).unwrap();
        assert_eq!(c.band, 0);
        assert!((c.count - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_compare_unknown_unit() {
        assert!(compare(Domain::Mass, "km", 1.0).is_err());
    }

    proptest! {
        /// Every non-negative value matches exactly one band by bounds
        #[test]
        fn prop_banding_total(v in 0.0f64..1.0e9, pick_mass in any::<bool>()) {
            let domain = if pick_mass { Domain::Mass } else { Domain::Length };
            let (index, band) = classify(domain, v);
            prop_assert!(v >= band.min);
            if index > 0 {
                prop_assert!(v < bands(domain)[index - 1].min);
            }
        }
    }
}
