use serde::{Deserialize, Serialize};

use crate::calculator::constants::*;
use crate::models::{Feed, Stage};

/// Scalar inputs of a calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inputs {
    /// Initial live weight (kg).
    pub start_weight: f64,
    /// Forecast goal (kg). Ignored in projection mode.
    pub target_weight: f64,
    /// One-time cost of the animal.
    pub genetic_price: f64,
    pub medicine_cost: f64,
    pub management_cost: f64,
    /// Expected sale price per kg of live weight.
    pub forecasted_hog_price: f64,
}

impl Inputs {
    /// Genetic + medicine + management.
    #[inline]
    pub fn other_costs(&self) -> f64 {
        self.genetic_price + self.medicine_cost + self.management_cost
    }
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            start_weight: DEFAULT_START_WEIGHT,
            target_weight: DEFAULT_TARGET_WEIGHT,
            genetic_price: DEFAULT_GENETIC_PRICE,
            medicine_cost: DEFAULT_MEDICINE_COST,
            management_cost: DEFAULT_MANAGEMENT_COST,
            forecasted_hog_price: DEFAULT_HOG_PRICE,
        }
    }
}

/// The complete editable input set: what gets saved and shared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmState {
    #[serde(flatten)]
    pub inputs: Inputs,
    pub stages: Vec<Stage>,
}

impl FarmState {
    /// The standard three-stage piglet-to-finisher timeline.
    pub fn seed_stages() -> Vec<Stage> {
        vec![
            Stage::new(
                "Piglet",
                7.0,
                25.0,
                vec![Feed::new("1", "W-Standard", 625000.0, 1.6)],
            ),
            Stage::new(
                "Grower",
                25.0,
                60.0,
                vec![Feed::new("2", "G-Standard", 550000.0, 2.2)],
            ),
            Stage::new(
                "Finisher",
                60.0,
                100.0,
                vec![Feed::new("3", "F-Standard", 500000.0, 2.8)],
            ),
        ]
    }
}

impl Default for FarmState {
    fn default() -> Self {
        Self {
            inputs: Inputs::default(),
            stages: Self::seed_stages(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_costs() {
        let inputs = Inputs::default();
        assert_eq!(inputs.other_costs(), 1_300_000.0);
    }

    #[test]
    fn test_seed_state_serializes_flat() {
        let json = serde_json::to_value(FarmState::default()).unwrap();
        assert_eq!(json["startWeight"], 7.0);
        assert_eq!(json["forecastedHogPrice"], 55000.0);
        assert_eq!(json["stages"][1]["feeds"][0]["productCode"], "G-Standard");
        assert_eq!(json["stages"][2]["feeds"][0]["bagsConsumed"], 0.0);
    }

    #[test]
    fn test_seed_stages_ordered() {
        let stages = FarmState::seed_stages();
        assert!(stages
            .windows(2)
            .all(|w| w[0].end_weight <= w[1].start_weight));
    }
}
