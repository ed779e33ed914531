use std::fmt::Display;

use crate::{rack::Rack, unit::Unit, weight_result::WeightResult};

#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub total_plates: u32,
    pub max_plates: Option<u32>,
    pub combinations: usize,
    pub lightest: f64,
    pub heaviest: f64,
    pub unit: Unit,
}

impl Summary {
    /// `None` when there is nothing to summarise.
    #[must_use]
    pub fn new(rack: &Rack, results: &[WeightResult]) -> Option<Self> {
        let lightest = results.first()?.total_weight();
        let heaviest = results.last()?.total_weight();

        Some(Summary {
            total_plates: rack.total_plates(),
            max_plates: rack.max_plates(),
            combinations: results.len(),
            lightest,
            heaviest,
            unit: rack.unit(),
        })
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Total plates:     {}", self.total_plates)?;
        match self.max_plates {
            Some(max) => writeln!(f, "Max plates/side:  {max}")?,
            None => writeln!(f, "Max plates/side:  no limit")?,
        }
        writeln!(f, "Combinations:     {}", self.combinations)?;
        writeln!(f, "Lightest:         {}", self.unit.format(self.lightest))?;
        write!(f, "Heaviest:         {}", self.unit.format(self.heaviest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarises_results() {
        let mut rack = Rack::new(2.0).unwrap();
        rack.add_plate(2.5, 2).unwrap();
        rack.add_plate(1.25, 2).unwrap();
        let results = rack.weights();
        let summary = Summary::new(&rack, &results).unwrap();

        assert_eq!(summary.total_plates, 4);
        assert_eq!(summary.max_plates, Some(6));
        assert_eq!(summary.combinations, results.len());
        assert_eq!(summary.lightest, 2.0);
        assert_eq!(summary.heaviest, 2.0 + 2.0 * (5.0 + 2.5));
        assert!(summary.to_string().contains("Heaviest:         17 kg"));
    }

    #[test]
    fn nothing_to_summarise() {
        assert_eq!(Summary::new(&Rack::default(), &[]), None);
    }
}
