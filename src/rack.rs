use tracing::debug;

use crate::{
    aggregator,
    calc_error::CalcError,
    enumerator::{self, MAX_SEARCH_SPACE},
    mode::Mode,
    plate::{self, Plate},
    unit::{Unit, round2},
    weight_result::WeightResult,
};

pub const DEFAULT_HANDLE_WEIGHT: f64 = 2.0;
pub const DEFAULT_MAX_PLATES: u32 = 6;

/// The validated inputs a shell collects: plate inventory, handle, unit,
/// mode and per-side cap. Every mutator validates before touching state.
#[derive(Clone, Debug, PartialEq)]
pub struct Rack {
    plates: Vec<Plate>,
    handle_weight: f64,
    unit: Unit,
    mode: Mode,
    max_plates: Option<u32>,
}

impl Default for Rack {
    fn default() -> Self {
        Rack {
            plates: Vec::new(),
            handle_weight: DEFAULT_HANDLE_WEIGHT,
            unit: Unit::default(),
            mode: Mode::default(),
            max_plates: Some(DEFAULT_MAX_PLATES),
        }
    }
}

impl Rack {
    ///
    /// # Errors
    /// If the handle weight is negative or not finite.
    ///
    pub fn new(handle_weight: f64) -> Result<Self, CalcError> {
        let mut rack = Rack::default();
        rack.set_handle_weight(handle_weight)?;
        Ok(rack)
    }

    #[must_use]
    pub fn plates(&self) -> &[Plate] {
        &self.plates
    }

    #[must_use]
    pub fn handle_weight(&self) -> f64 {
        self.handle_weight
    }

    #[must_use]
    pub fn unit(&self) -> Unit {
        self.unit
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn max_plates(&self) -> Option<u32> {
        self.max_plates
    }

    /// Plates owned across every denomination.
    #[must_use]
    pub fn total_plates(&self) -> u32 {
        self.plates.iter().map(Plate::count).sum()
    }

    ///
    /// # Errors
    /// If the weight or count is out of range, the merged count exceeds 100,
    /// or the inventory would grow past [`MAX_SEARCH_SPACE`] combinations.
    ///
    pub fn add_plate(&mut self, weight: f64, count: i64) -> Result<(), CalcError> {
        let added = Plate::try_new(weight, count)?;
        let mut plates = self.plates.clone();

        match self.position(added.weight()) {
            Some(i) => {
                let merged = i64::from(plates[i].count()) + i64::from(added.count());
                let merged = plate::validate_quantity(merged)?;
                plates[i] = plates[i].with_count(merged);
            }
            None => plates.push(added),
        }

        self.plates = check_search_space(plates)?;
        Ok(())
    }

    pub fn clear_plates(&mut self) {
        self.plates.clear();
    }

    /// Sets the count of an existing plate. A count of zero removes it.
    ///
    /// # Errors
    /// If the count is out of range or the inventory would grow past
    /// [`MAX_SEARCH_SPACE`] combinations.
    ///
    pub fn set_quantity(&mut self, weight: f64, count: i64) -> Result<(), CalcError> {
        let count = plate::validate_quantity(count)?;

        if count == 0 {
            self.remove_plate(weight);
        } else if let Some(i) = self.position(weight) {
            let mut plates = self.plates.clone();
            plates[i] = plates[i].with_count(count);
            self.plates = check_search_space(plates)?;
        }

        Ok(())
    }

    /// Returns whether a plate of that weight was present.
    pub fn remove_plate(&mut self, weight: f64) -> bool {
        let before = self.plates.len();
        self.plates.retain(|plate| plate.weight() != weight);
        self.plates.len() != before
    }

    ///
    /// # Errors
    /// If the weight is negative or not finite.
    ///
    pub fn set_handle_weight(&mut self, weight: f64) -> Result<(), CalcError> {
        self.handle_weight = plate::validate_handle_weight(weight)?;
        Ok(())
    }

    /// `None` lifts the cap.
    ///
    /// # Errors
    /// If the cap is outside [1, 20].
    ///
    pub fn set_max_plates(&mut self, max_plates: Option<i64>) -> Result<(), CalcError> {
        self.max_plates = max_plates.map(plate::validate_max_plates).transpose()?;
        Ok(())
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Re-expresses the handle and every plate in `unit`, rounding each to
    /// two decimals. Plates that land on the same weight are merged in input
    /// order. Nothing changes if any converted value is out of range.
    ///
    /// # Errors
    /// If a converted plate weight falls outside (0, 1000] or a merged count
    /// exceeds 100.
    ///
    pub fn convert_to(&mut self, unit: Unit) -> Result<(), CalcError> {
        if unit == self.unit {
            return Ok(());
        }

        debug!(from = %self.unit, to = %unit, "converting rack");

        let from = self.unit;
        let handle_weight =
            plate::validate_handle_weight(round2(from.convert(self.handle_weight, unit)))?;

        let mut plates: Vec<Plate> = Vec::with_capacity(self.plates.len());
        for original in &self.plates {
            let weight = plate::validate_plate_weight(round2(from.convert(original.weight(), unit)))?;
            match plates.iter_mut().find(|plate| plate.weight() == weight) {
                Some(existing) => {
                    let merged = i64::from(existing.count()) + i64::from(original.count());
                    *existing = existing.with_count(plate::validate_quantity(merged)?);
                }
                None => plates.push(original.with_weight(weight)),
            }
        }

        self.handle_weight = handle_weight;
        self.plates = plates;
        self.unit = unit;
        Ok(())
    }

    /// Labels the stored weights with `unit` without converting them.
    #[must_use]
    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    /// Every distinct weight reachable with the current inputs, ascending.
    #[must_use]
    pub fn weights(&self) -> Vec<WeightResult> {
        aggregator::calculate_weights(&self.plates, self.handle_weight, self.mode, self.max_plates)
    }

    fn position(&self, weight: f64) -> Option<usize> {
        self.plates.iter().position(|plate| plate.weight() == weight)
    }
}

// Counted on the full inventory; pair mode only ever shrinks it.
fn check_search_space(plates: Vec<Plate>) -> Result<Vec<Plate>, CalcError> {
    let leaves = enumerator::search_space(&plates);
    if leaves > MAX_SEARCH_SPACE {
        return Err(CalcError::SearchSpaceTooLarge(leaves));
    }
    Ok(plates)
}
