//! Ladder moves: every step down multiplies by 10, every step up divides by 10

use std::fmt;
use serde::Serialize;
use crate::Domain;
use crate::unit::ConversionError;
use crate::units::UNITS;

/// Signed distance between two rungs of a ladder
///
/// Positive steps go down the ladder (towards smaller units).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LadderMove {
    pub steps: i32,
}

impl LadderMove {
    /// Factor applied to the value when making this move
    pub fn multiplier(&self) -> f64 {
        10f64.powi(self.steps)
    }

    /// Human-readable rule, e.g. "3 steps down: multiply by 1000"
    pub fn describe(&self) -> String {
        let n = self.steps.unsigned_abs();
        let plural = if n == 1 { "step" } else { "steps" };
        let power = 10u64.pow(n);
        match self.steps {
            0 => "same rung: value unchanged".to_string(),
            s if s > 0 => format!("{} {} down: multiply by {}", n, plural, power),
            _ => format!("{} {} up: divide by {}", n, plural, power),
        }
    }
}

impl fmt::Display for LadderMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

/// Work out how far apart two units are on their ladder
pub fn ladder_move(domain: Domain, from: &str, to: &str) -> Result<LadderMove, ConversionError> {
    let from = UNITS.position_of(domain, from)? as i32;
    let to = UNITS.position_of(domain, to)? as i32;
    Ok(LadderMove { steps: to - from })
}

/// One rung of a staircase drawing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rung {
    /// Position from the top, starting at 0
    pub index: usize,
    pub name: &'static str,
    /// Height above the floor; the top rung is highest
    pub level: usize,
}

/// Staircase layout of a domain's ladder, top rung first
pub fn rungs(domain: Domain) -> Vec<Rung> {
    let ladder = UNITS.ladder(domain);
    ladder
        .iter()
        .enumerate()
        .map(|(index, unit)| Rung {
            index,
            name: unit.name,
            level: ladder.len() - index,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert;

    #[test]
    fn test_move_down() {
        let m = ladder_move(Domain::Length, "km", "m").unwrap();
        assert_eq!(m.steps, 3);
        assert_eq!(m.multiplier(), 1000.0);
        assert_eq!(m.describe(), "3 steps down: multiply by 1000");
    }

    #[test]
    fn test_move_up() {
        let m = ladder_move(Domain::Mass, "g", "hg (ons)").unwrap();
        assert_eq!(m.steps, -2);
        assert_eq!(m.describe(), "2 steps up: divide by 100");
    }

    #[test]
    fn test_single_step_and_same_rung() {
        assert_eq!(ladder_move(Domain::Length, "m", "dm").unwrap().describe(), "1 step down: multiply by 10");
        assert_eq!(ladder_move(Domain::Length, "m", "m").unwrap().steps, 0);
    }

    #[test]
    fn test_move_agrees_with_convert() {
        for domain in Domain::ALL {
            for a in UNITS.units_of(domain) {
                for b in UNITS.units_of(domain) {
                    let expected = convert(domain, a, b, 1.0).unwrap();
                    let m = ladder_move(domain, a, b).unwrap().multiplier();
                    assert!((m - expected).abs() <= 1e-12 * expected, "{a} -> {b}");
                }
            }
        }
    }

    #[test]
    fn test_unknown_unit() {
        assert!(ladder_move(Domain::Length, "km", "kg").is_err());
    }

    #[test]
    fn test_rungs() {
        let r = rungs(Domain::Mass);
        assert_eq!(r.len(), 7);
        assert_eq!(r[0], Rung { index: 0, name: "kg", level: 7 });
        assert_eq!(r[6], Rung { index: 6, name: "mg", level: 1 });
    }
}
