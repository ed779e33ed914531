use crate::mode::Mode;
use crate::rack::Rack;
use crate::unit::Unit;
use crate::weight_result::WeightResult;

/// A [`Rack`] for the Swift shell. Mutators report whether the input was accepted.
pub struct DumbbellRack {
    rack: Rack,
}

pub struct DumbbellWeight {
    result: WeightResult,
    unit: Unit,
}

#[swift_bridge::bridge]
mod ffi {
    extern "Rust" {
        type DumbbellRack;
        type DumbbellWeight;

        #[swift_bridge(init)]
        fn new(handle_weight: f64) -> DumbbellRack;
        fn add_plate(self: &mut DumbbellRack, weight: f64, count: i64) -> bool;
        fn set_quantity(self: &mut DumbbellRack, weight: f64, count: i64) -> bool;
        fn remove_plate(self: &mut DumbbellRack, weight: f64) -> bool;
        fn set_handle_weight(self: &mut DumbbellRack, weight: f64) -> bool;
        fn set_max_plates(self: &mut DumbbellRack, max_plates: i64) -> bool;
        fn set_pair_mode(self: &mut DumbbellRack, pair: bool);
        fn use_pounds(self: &mut DumbbellRack, pounds: bool) -> bool;
        fn handle_weight(self: &DumbbellRack) -> f64;
        fn weights(self: &DumbbellRack) -> Vec<DumbbellWeight>;

        fn total_weight(self: &DumbbellWeight) -> f64;
        fn set_weight(self: &DumbbellWeight) -> f64;
        fn description(self: &DumbbellWeight) -> String;
    }
}

impl DumbbellRack {
    /// An invalid handle weight falls back to the default one.
    #[must_use]
    pub fn new(handle_weight: f64) -> Self {
        DumbbellRack {
            rack: Rack::new(handle_weight).unwrap_or_default(),
        }
    }

    pub fn add_plate(&mut self, weight: f64, count: i64) -> bool {
        self.rack.add_plate(weight, count).is_ok()
    }

    pub fn set_quantity(&mut self, weight: f64, count: i64) -> bool {
        self.rack.set_quantity(weight, count).is_ok()
    }

    pub fn remove_plate(&mut self, weight: f64) -> bool {
        self.rack.remove_plate(weight)
    }

    pub fn set_handle_weight(&mut self, weight: f64) -> bool {
        self.rack.set_handle_weight(weight).is_ok()
    }

    /// Zero lifts the cap.
    pub fn set_max_plates(&mut self, max_plates: i64) -> bool {
        let max_plates = (max_plates != 0).then_some(max_plates);
        self.rack.set_max_plates(max_plates).is_ok()
    }

    pub fn set_pair_mode(&mut self, pair: bool) {
        self.rack.set_mode(if pair { Mode::Pair } else { Mode::Single });
    }

    /// Rejected when a converted plate would fall out of range.
    pub fn use_pounds(&mut self, pounds: bool) -> bool {
        self.rack
            .convert_to(if pounds { Unit::Lbs } else { Unit::Kg })
            .is_ok()
    }

    #[must_use]
    pub fn handle_weight(&self) -> f64 {
        self.rack.handle_weight()
    }

    #[must_use]
    pub fn weights(&self) -> Vec<DumbbellWeight> {
        let unit = self.rack.unit();
        self.rack
            .weights()
            .into_iter()
            .map(|result| DumbbellWeight { result, unit })
            .collect()
    }
}

impl DumbbellWeight {
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.result.total_weight()
    }

    #[must_use]
    pub fn set_weight(&self) -> f64 {
        self.result.set_weight()
    }

    #[must_use]
    pub fn description(&self) -> String {
        self.result.describe(self.unit)
    }
}
