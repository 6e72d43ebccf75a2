use crate::calculator::assembly::round_to;
use crate::calculator::constants::{OUTPUT_DECIMALS, PROFIT_SCENARIOS};
use crate::models::ProfitScenario;

/// Build the pessimistic / expected / optimistic outcomes, in that order.
pub fn profit_scenarios(hog_price: f64, final_weight: f64, total_cost: f64) -> Vec<ProfitScenario> {
    PROFIT_SCENARIOS
        .iter()
        .map(|(label, multiplier)| {
            let price = hog_price * multiplier;
            let revenue = final_weight * price;
            let profit = revenue - total_cost;
            ProfitScenario {
                scenario: label.to_string(),
                hog_price: round_to(price, OUTPUT_DECIMALS),
                revenue: round_to(revenue, OUTPUT_DECIMALS),
                profit: round_to(profit, OUTPUT_DECIMALS),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    #[test]
    fn test_reference_values() {
        let scenarios = profit_scenarios(55000.0, 100.0, 5_000_000.0);
        let expected = [
            (52250.0, 5_225_000.0, 225_000.0),
            (55000.0, 5_500_000.0, 500_000.0),
            (57750.0, 5_775_000.0, 775_000.0),
        ];

        assert_eq!(scenarios.len(), 3);
        for (s, (price, revenue, profit)) in scenarios.iter().zip(expected) {
            assert_float_absolute_eq!(s.hog_price, price, 1e-9);
            assert_float_absolute_eq!(s.revenue, revenue, 1e-9);
            assert_float_absolute_eq!(s.profit, profit, 1e-9);
        }
        assert_eq!(scenarios[0].scenario, "Pessimistic (-5%)");
        assert_eq!(scenarios[2].scenario, "Optimistic (+5%)");
    }

    #[test]
    fn test_loss_is_negative() {
        let scenarios = profit_scenarios(10.0, 0.0, 100.0);
        assert!(scenarios.iter().all(|s| s.profit == -100.0));
    }
}
