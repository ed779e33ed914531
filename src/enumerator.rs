use itertools::Itertools;
use tracing::debug;

use crate::{combination::Combination, plate::Plate, plate_usage::PlateUsage};

/// Largest search space a rack accepts.
pub const MAX_SEARCH_SPACE: u128 = 2_000_000;

/// Number of quantity vectors the enumerator visits before the cap is applied.
#[must_use]
pub fn search_space(plates: &[Plate]) -> u128 {
    plates
        .iter()
        .map(|plate| u128::from(plate.count()) + 1)
        .product()
}

/// Every way to load one side from `plates`, taking 0..=count of each
/// denomination. Denominations are decided in input order with the last one
/// varying fastest, so the output order is deterministic. Combinations using
/// more than `max_per_side` plates in total are dropped. Zero quantities are
/// omitted, so an empty inventory yields the single empty combination.
#[must_use]
pub fn enumerate(plates: &[Plate], max_per_side: Option<u32>) -> Vec<Combination> {
    debug!(
        denominations = plates.len(),
        search_space = %search_space(plates),
        ?max_per_side,
        "enumerating plate combinations"
    );

    if plates.is_empty() {
        return vec![Combination::default()];
    }

    let combinations = plates
        .iter()
        .map(|plate| 0..=plate.count())
        .multi_cartesian_product()
        .filter(|quantities| {
            max_per_side.is_none_or(|cap| quantities.iter().sum::<u32>() <= cap)
        })
        .map(|quantities| {
            Combination::new(
                plates
                    .iter()
                    .zip(quantities)
                    .filter(|(_, quantity)| *quantity > 0)
                    .map(|(plate, quantity)| PlateUsage::new(plate.weight(), quantity))
                    .collect(),
            )
        })
        .collect::<Vec<_>>();

    debug!(combinations = combinations.len(), "enumeration finished");

    combinations
}
