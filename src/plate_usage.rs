use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// How many plates of one denomination sit on one side of the handle.
/// The enumerator never records a zero quantity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlateUsage {
    plate_weight: f64,
    quantity: u32,
}

impl PlateUsage {
    #[must_use]
    pub fn new(plate_weight: f64, quantity: u32) -> Self {
        PlateUsage {
            plate_weight,
            quantity,
        }
    }

    #[must_use]
    pub fn plate_weight(&self) -> f64 {
        self.plate_weight
    }

    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        self.plate_weight * f64::from(self.quantity)
    }
}

impl Display for PlateUsage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}×{}", self.quantity, self.plate_weight)
    }
}
