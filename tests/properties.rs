use dumbbell_rs::{
    aggregator::{aggregate, calculate_weights},
    enumerator::{enumerate, search_space},
    mode::Mode,
    plate::Plate,
    unit::{Unit, convert},
    weight_result::WeightResult,
};

fn inventories() -> Vec<Vec<Plate>> {
    vec![
        Plate::from_weights(&[]),
        Plate::from_weights(&[(5.0, 0)]),
        Plate::from_weights(&[(20.0, 1)]),
        Plate::from_weights(&[(0.5, 4), (1.25, 4), (2.5, 4)]),
        Plate::from_weights(&[(1.0, 3), (2.0, 5), (2.5, 2), (5.0, 2)]),
        Plate::from_weights(&[(0.1, 3), (0.2, 3), (0.3, 3), (1.5, 2)]),
        Plate::from_weights(&[(10.0, 2), (5.0, 2), (2.5, 2), (1.25, 2), (0.5, 2)]),
    ]
}

fn caps() -> Vec<Option<u32>> {
    vec![None, Some(1), Some(2), Some(4), Some(20)]
}

#[test]
fn uncapped_enumeration_covers_search_space() {
    for plates in inventories() {
        let combinations = enumerate(&plates, None);
        assert_eq!(combinations.len() as u128, search_space(&plates));
    }
}

#[test]
fn cap_only_removes_combinations() {
    for plates in inventories() {
        for cap in caps().into_iter().flatten() {
            let capped = enumerate(&plates, Some(cap));
            assert!(capped.len() as u128 <= search_space(&plates));
            assert!(capped.iter().all(|combo| combo.plate_count() <= cap));
            assert!(capped.iter().flat_map(|c| c.usages()).all(|u| u.quantity() > 0));
        }
    }
}

#[test]
fn repeated_calls_are_identical() {
    for plates in inventories() {
        for cap in caps() {
            assert_eq!(enumerate(&plates, cap), enumerate(&plates, cap));
            for mode in [Mode::Single, Mode::Pair] {
                assert_eq!(
                    calculate_weights(&plates, 2.5, mode, cap),
                    calculate_weights(&plates, 2.5, mode, cap)
                );
            }
        }
    }
}

#[test]
fn totals_are_unique_and_ascending() {
    for plates in inventories() {
        for cap in caps() {
            for mode in [Mode::Single, Mode::Pair] {
                let totals = calculate_weights(&plates, 1.75, mode, cap)
                    .iter()
                    .map(WeightResult::total_weight)
                    .collect::<Vec<_>>();
                assert!(!totals.is_empty());
                assert!(totals.windows(2).all(|w| w[0] < w[1]), "{totals:?}");
            }
        }
    }
}

#[test]
fn every_total_is_handle_plus_both_sides() {
    for plates in inventories() {
        let handle = 2.0;
        let combinations = enumerate(&plates, Some(4));
        for result in aggregate(combinations, handle, Mode::Single) {
            let expected = handle + 2.0 * result.plate_combo().plate_weight();
            assert!((result.total_weight() - expected).abs() <= 0.005);
        }
    }
}

#[test]
fn kg_lbs_round_trip() {
    let mut x = 0.01;
    while x < 5000.0 {
        let back = convert(convert(x, Unit::Kg, Unit::Lbs), Unit::Lbs, Unit::Kg);
        assert!(((back - x) / x).abs() < 1e-6);
        x *= 1.37;
    }
}
