use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{calc_error::CalcError, plate::Plate};

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Ord, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Single,
    Pair,
}

impl Mode {
    /// Number of implements loaded from the same inventory.
    #[must_use]
    pub fn implements(&self) -> u32 {
        match self {
            Mode::Single => 1,
            Mode::Pair => 2,
        }
    }

    /// Plates one implement can draw from. In pair mode the inventory is split
    /// evenly: denominations with fewer than two plates drop out, the rest keep
    /// `count / 2`.
    #[must_use]
    pub fn eligible_plates(&self, plates: &[Plate]) -> Vec<Plate> {
        match self {
            Mode::Single => plates.to_vec(),
            Mode::Pair => plates
                .iter()
                .filter(|plate| plate.count() >= 2)
                .map(|plate| plate.with_count(plate.count() / 2))
                .collect(),
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Single => write!(f, "single"),
            Mode::Pair => write!(f, "pair"),
        }
    }
}

impl FromStr for Mode {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "single" | "s" => Ok(Mode::Single),
            "pair" | "p" => Ok(Mode::Pair),
            _ => Err(CalcError::InvalidMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_mode_keeps_inventory() {
        let plates = Plate::from_weights(&[(5.0, 3), (2.5, 0)]);
        assert_eq!(Mode::Single.eligible_plates(&plates), plates);
    }

    #[test]
    fn pair_mode_halves_and_drops_singletons() {
        let plates = Plate::from_weights(&[(5.0, 3), (2.5, 1), (1.25, 4)]);
        assert_eq!(
            Mode::Pair.eligible_plates(&plates),
            Plate::from_weights(&[(5.0, 1), (1.25, 2)])
        );
    }

    #[test]
    fn parses_modes() {
        assert_eq!("Pair".parse::<Mode>().unwrap(), Mode::Pair);
        assert_eq!("single".parse::<Mode>().unwrap(), Mode::Single);
        assert!(matches!("triple".parse::<Mode>(), Err(CalcError::InvalidMode(_))));
    }
}
