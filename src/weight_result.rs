use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{combination::Combination, mode::Mode, unit::Unit};

/// One achievable total, rounded to two decimals, with the first plate
/// arrangement found for it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeightResult {
    total_weight: f64,
    plate_combo: Combination,
    mode: Mode,
}

impl WeightResult {
    #[must_use]
    pub fn new(total_weight: f64, plate_combo: Combination, mode: Mode) -> Self {
        WeightResult {
            total_weight,
            plate_combo,
            mode,
        }
    }

    /// Weight of one implement.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    #[must_use]
    pub fn plate_combo(&self) -> &Combination {
        &self.plate_combo
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Combined weight of every implement in the set.
    #[must_use]
    pub fn set_weight(&self) -> f64 {
        self.total_weight * f64::from(self.mode.implements())
    }

    #[must_use]
    pub fn describe(&self, unit: Unit) -> String {
        match self.mode {
            Mode::Single => format!(
                "{}: {}",
                unit.format(self.total_weight),
                self.plate_combo.describe(unit)
            ),
            Mode::Pair => format!(
                "{} each ({} total): {}",
                unit.format(self.total_weight),
                unit.format(self.set_weight()),
                self.plate_combo.describe(unit)
            ),
        }
    }
}

impl Display for WeightResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.total_weight, self.mode, self.plate_combo)
    }
}
