use itertools::Itertools;
use tracing::debug;

use crate::{
    combination::Combination, enumerator, mode::Mode, plate::Plate, unit::round2,
    weight_result::WeightResult,
};

/// Turns one-side combinations into distinct implement weights.
///
/// Each total is `handle_weight + 2 * plate side weight`, rounded to two
/// decimals. When several combinations round to the same total the first in
/// enumeration order wins and the rest are dropped. The result is ascending.
#[must_use]
pub fn aggregate(
    combinations: impl IntoIterator<Item = Combination>,
    handle_weight: f64,
    mode: Mode,
) -> Vec<WeightResult> {
    let results = combinations
        .into_iter()
        .map(|combo| {
            let total_weight = round2(handle_weight + 2.0 * combo.plate_weight());
            WeightResult::new(total_weight, combo, mode)
        })
        .unique_by(|result| weight_key(result.total_weight()))
        .sorted_by(|a, b| a.total_weight().total_cmp(&b.total_weight()))
        .collect::<Vec<_>>();

    debug!(weights = results.len(), %mode, "aggregated weights");

    results
}

/// Every distinct weight one implement can reach in `mode`.
#[must_use]
pub fn calculate_weights(
    plates: &[Plate],
    handle_weight: f64,
    mode: Mode,
    max_per_side: Option<u32>,
) -> Vec<WeightResult> {
    let eligible = mode.eligible_plates(plates);
    aggregate(
        enumerator::enumerate(&eligible, max_per_side),
        handle_weight,
        mode,
    )
}

// Totals are already rounded, so the cent count identifies them exactly.
#[allow(clippy::cast_possible_truncation)]
fn weight_key(weight: f64) -> i64 {
    (weight * 100.0).round() as i64
}
