use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::calc_error::CalcError;

pub const MAX_PLATE_WEIGHT: f64 = 1000.0;
pub const MAX_QUANTITY: i64 = 100;
pub const MIN_MAX_PLATES: i64 = 1;
pub const MAX_MAX_PLATES: i64 = 20;

/// One plate denomination and the total number of plates of it owned
/// (across both sides, and both implements in pair mode).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plate {
    weight: f64,
    #[serde(rename = "quantity")]
    count: u32,
}

impl Plate {
    /// Builds a plate without validation. Use [`Plate::try_new`] for user input.
    #[must_use]
    pub fn new(weight: f64, count: u32) -> Self {
        Plate { weight, count }
    }

    ///
    /// # Errors
    /// If the weight is outside (0, 1000] or the count outside [0, 100].
    ///
    pub fn try_new(weight: f64, count: i64) -> Result<Self, CalcError> {
        let weight = validate_plate_weight(weight)?;
        let count = validate_quantity(count)?;
        Ok(Plate::new(weight, count))
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    #[must_use]
    pub fn with_count(self, count: u32) -> Self {
        Plate::new(self.weight, count)
    }

    #[must_use]
    pub fn with_weight(self, weight: f64) -> Self {
        Plate::new(weight, self.count)
    }

    pub fn from_weights(weights: &[(f64, u32)]) -> Vec<Plate> {
        weights
            .iter()
            .map(|&(weight, count)| Plate::new(weight, count))
            .collect()
    }
}

impl Display for Plate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.weight, self.count)
    }
}

impl FromStr for Plate {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CalcError::InvalidPlate(s.to_string());
        let (weight, count) = s
            .trim()
            .split_once(['x', 'X', '*'])
            .ok_or_else(invalid)?;
        let weight = weight.trim().parse::<f64>().map_err(|_| invalid())?;
        let count = count.trim().parse::<i64>().map_err(|_| invalid())?;
        Plate::try_new(weight, count)
    }
}

///
/// # Errors
/// If the weight is NaN, not positive, or above 1000.
///
pub fn validate_plate_weight(weight: f64) -> Result<f64, CalcError> {
    if weight > 0.0 && weight <= MAX_PLATE_WEIGHT {
        Ok(weight)
    } else {
        Err(CalcError::InvalidPlateWeight(weight))
    }
}

///
/// # Errors
/// If the quantity is negative or above 100.
///
pub fn validate_quantity(quantity: i64) -> Result<u32, CalcError> {
    match u32::try_from(quantity) {
        Ok(count) if quantity <= MAX_QUANTITY => Ok(count),
        _ => Err(CalcError::InvalidQuantity(quantity)),
    }
}

///
/// # Errors
/// If the cap is outside [1, 20].
///
pub fn validate_max_plates(max_plates: i64) -> Result<u32, CalcError> {
    match u32::try_from(max_plates) {
        Ok(cap) if (MIN_MAX_PLATES..=MAX_MAX_PLATES).contains(&max_plates) => Ok(cap),
        _ => Err(CalcError::InvalidMaxPlates(max_plates)),
    }
}

///
/// # Errors
/// If the handle weight is NaN, infinite or negative.
///
pub fn validate_handle_weight(weight: f64) -> Result<f64, CalcError> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(weight)
    } else {
        Err(CalcError::InvalidHandleWeight(weight))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_weights() {
        assert!(validate_plate_weight(0.0).is_err());
        assert!(validate_plate_weight(-2.5).is_err());
        assert!(validate_plate_weight(1000.5).is_err());
        assert!(validate_plate_weight(f64::NAN).is_err());
        assert_eq!(validate_plate_weight(1000.0).unwrap(), 1000.0);
        assert_eq!(validate_plate_weight(0.25).unwrap(), 0.25);
    }

    #[test]
    fn rejects_out_of_range_quantities() {
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(101).is_err());
        assert_eq!(validate_quantity(0).unwrap(), 0);
        assert_eq!(validate_quantity(100).unwrap(), 100);
    }

    #[test]
    fn max_plates_bounds() {
        assert!(validate_max_plates(0).is_err());
        assert!(validate_max_plates(21).is_err());
        assert_eq!(validate_max_plates(1).unwrap(), 1);
        assert_eq!(validate_max_plates(20).unwrap(), 20);
    }

    #[test]
    fn handle_weight_must_be_finite_and_non_negative() {
        assert!(validate_handle_weight(-0.1).is_err());
        assert!(validate_handle_weight(f64::INFINITY).is_err());
        assert_eq!(validate_handle_weight(0.0).unwrap(), 0.0);
    }

    #[test]
    fn parses_weight_by_count() {
        let plate: Plate = "2.5x4".parse().unwrap();
        assert_eq!(plate, Plate::new(2.5, 4));

        let plate: Plate = " 10 X 2 ".parse().unwrap();
        assert_eq!(plate, Plate::new(10.0, 2));

        assert!(matches!("2.5".parse::<Plate>(), Err(CalcError::InvalidPlate(_))));
        assert!(matches!("ax2".parse::<Plate>(), Err(CalcError::InvalidPlate(_))));
        assert!(matches!("2.5x1.5".parse::<Plate>(), Err(CalcError::InvalidPlate(_))));
        assert!(matches!("0x2".parse::<Plate>(), Err(CalcError::InvalidPlateWeight(_))));
        assert!(matches!("5x-1".parse::<Plate>(), Err(CalcError::InvalidQuantity(-1))));
    }
}
