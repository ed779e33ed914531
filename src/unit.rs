use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::calc_error::CalcError;

pub const KG_TO_LBS: f64 = 2.20462;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Kg,
    Lbs,
}

impl Unit {
    /// Re-expresses `weight` given in `self` in `to`.
    /// lbs to kg divides by the same factor so a round trip only drifts by float epsilon.
    #[must_use]
    pub fn convert(self, weight: f64, to: Unit) -> f64 {
        match (self, to) {
            (Unit::Kg, Unit::Lbs) => weight * KG_TO_LBS,
            (Unit::Lbs, Unit::Kg) => weight / KG_TO_LBS,
            _ => weight,
        }
    }

    /// Whole weights print bare, everything else with two decimals.
    #[must_use]
    pub fn format(self, weight: f64) -> String {
        if weight.fract() == 0.0 {
            format!("{weight} {self}")
        } else {
            format!("{weight:.2} {self}")
        }
    }

    #[must_use]
    pub fn common_plates(self) -> &'static [f64] {
        match self {
            Unit::Kg => &[0.5, 1.0, 1.25, 1.5, 2.0, 2.5, 5.0],
            Unit::Lbs => &[1.0, 2.5, 5.0, 10.0],
        }
    }

    #[must_use]
    pub fn common_handles(self) -> &'static [f64] {
        match self {
            Unit::Kg => &[1.0, 2.0, 2.5, 3.0, 4.0, 5.0],
            Unit::Lbs => &[2.0, 4.0, 5.0, 6.0, 8.0, 10.0],
        }
    }
}

/// Free-function form of [`Unit::convert`].
#[must_use]
pub fn convert(weight: f64, from: Unit, to: Unit) -> f64 {
    from.convert(weight, to)
}

/// Rounds half away from zero to two decimal places.
#[must_use]
pub fn round2(weight: f64) -> f64 {
    (weight * 100.0).round() / 100.0
}

impl Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unit::Kg => write!(f, "kg"),
            Unit::Lbs => write!(f, "lbs"),
        }
    }
}

impl FromStr for Unit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kgs" => Ok(Unit::Kg),
            "lb" | "lbs" => Ok(Unit::Lbs),
            _ => Err(CalcError::InvalidUnit(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_when_units_match() {
        assert_eq!(convert(12.5, Unit::Kg, Unit::Kg), 12.5);
        assert_eq!(convert(12.5, Unit::Lbs, Unit::Lbs), 12.5);
    }

    #[test]
    fn converts_between_kg_and_lbs() {
        assert!((convert(10.0, Unit::Kg, Unit::Lbs) - 22.0462).abs() < 1e-9);
        assert!((convert(22.0462, Unit::Lbs, Unit::Kg) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn round_trip_stays_within_tolerance() {
        for x in [0.001, 0.5, 1.25, 2.5, 20.0, 137.77, 999.99, 12_345.678] {
            let back = convert(convert(x, Unit::Kg, Unit::Lbs), Unit::Lbs, Unit::Kg);
            assert!(((back - x) / x).abs() < 1e-6, "{x} came back as {back}");
        }
    }

    #[test]
    fn rounds_to_cents() {
        assert_eq!(round2(0.1 + 0.2), 0.3);
        assert_eq!(round2(22.046_2), 22.05);
        assert_eq!(round2(7.5), 7.5);
    }

    #[test]
    fn formats_whole_and_fractional_weights() {
        assert_eq!(Unit::Kg.format(20.0), "20 kg");
        assert_eq!(Unit::Kg.format(7.5), "7.50 kg");
        assert_eq!(Unit::Lbs.format(22.05), "22.05 lbs");
    }

    #[test]
    fn parses_units() {
        assert_eq!("KG".parse::<Unit>().unwrap(), Unit::Kg);
        assert_eq!("lbs".parse::<Unit>().unwrap(), Unit::Lbs);
        assert!("stone".parse::<Unit>().is_err());
    }
}
