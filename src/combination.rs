use std::fmt::Display;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{plate_usage::PlateUsage, unit::Unit};

/// The plates loaded on one side of the handle, in input denomination order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Combination(Vec<PlateUsage>);

impl Combination {
    #[must_use]
    pub fn new(usages: Vec<PlateUsage>) -> Self {
        Combination(usages)
    }

    #[must_use]
    pub fn usages(&self) -> &[PlateUsage] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Weight of the plates on one side.
    #[must_use]
    pub fn plate_weight(&self) -> f64 {
        self.0.iter().map(PlateUsage::weight).sum()
    }

    /// Number of plates on one side.
    #[must_use]
    pub fn plate_count(&self) -> u32 {
        self.0.iter().map(PlateUsage::quantity).sum()
    }

    /// Heaviest plates first. Presentation only; the stored order is untouched.
    #[must_use]
    pub fn sorted_for_display(&self) -> Vec<PlateUsage> {
        self.0
            .iter()
            .copied()
            .sorted_by(|a, b| b.plate_weight().total_cmp(&a.plate_weight()))
            .collect()
    }

    #[must_use]
    pub fn describe(&self, unit: Unit) -> String {
        if self.is_empty() {
            return "handle only".to_string();
        }

        self.sorted_for_display()
            .iter()
            .map(|usage| format!("{}×{}", usage.quantity(), unit.format(usage.plate_weight())))
            .join(", ")
    }
}

impl Display for Combination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "handle only");
        }
        write!(f, "{}", self.sorted_for_display().iter().join(", "))
    }
}

impl From<Vec<PlateUsage>> for Combination {
    fn from(usages: Vec<PlateUsage>) -> Self {
        Combination::new(usages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combo() -> Combination {
        Combination::new(vec![PlateUsage::new(2.5, 1), PlateUsage::new(5.0, 2)])
    }

    #[test]
    fn sums_one_side() {
        assert_eq!(combo().plate_weight(), 12.5);
        assert_eq!(combo().plate_count(), 3);
        assert_eq!(Combination::default().plate_weight(), 0.0);
    }

    #[test]
    fn display_sorts_heaviest_first_without_reordering() {
        let combo = combo();
        assert_eq!(combo.describe(Unit::Kg), "2×5 kg, 1×2.50 kg");
        assert_eq!(combo.to_string(), "2×5, 1×2.5");
        assert_eq!(combo.usages()[0].plate_weight(), 2.5);
    }

    #[test]
    fn empty_combination_is_handle_only() {
        assert_eq!(Combination::default().describe(Unit::Lbs), "handle only");
        assert_eq!(Combination::default().to_string(), "handle only");
    }
}
