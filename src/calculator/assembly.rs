use tracing::debug;

use crate::calculator::constants::*;
use crate::calculator::forecast::forecast_feed;
use crate::calculator::mode::select_mode;
use crate::calculator::projection::project_feed;
use crate::calculator::scenarios::profit_scenarios;
use crate::models::{CalculationMode, CalculationResult, Feed, Inputs, Stage, StageCostDetail};

/// Physical constants used by the engines.
#[derive(Debug, Clone)]
pub struct CalcConfig {
    pub bag_weight_kg: f64,
    pub average_daily_gain_kg: f64,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            bag_weight_kg: BAG_WEIGHT_KG,
            average_daily_gain_kg: AVERAGE_DAILY_GAIN_KG,
        }
    }
}

/// Unrounded feed totals accumulated by either engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedTotals {
    pub feed_cost: f64,
    pub feed_consumed: f64,
    pub weight_gain: f64,
    pub stage_costs: Vec<StageCostDetail>,
}

impl FeedTotals {
    /// Accumulate one stage/feed contribution; itemize it only if it cost something.
    pub(crate) fn add(&mut self, stage: &Stage, feed: &Feed, cost: f64, feed_kg: f64, weight_gain: f64) {
        self.feed_cost += cost;
        self.feed_consumed += feed_kg;
        self.weight_gain += weight_gain;

        if cost > 0.0 {
            self.stage_costs.push(StageCostDetail {
                name: stage.name.clone(),
                cost: round_to(cost, OUTPUT_DECIMALS),
                feed: feed.product_code.clone(),
                feed_kg: round_to(feed_kg, OUTPUT_DECIMALS),
                price_per_bag: feed.price_per_bag,
            });
        }
    }
}

/// Round half away from zero to `decimals` places, judged on the exact
/// binary value rather than on the scaled product.
///
/// `0.015` is stored as `0.01499999...`, so it rounds to `0.01` even though
/// `0.015 * 100.0` evaluates to exactly `1.5`.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    let scaled = value * factor;
    // Exact error of the multiplication: value * factor == scaled + error.
    let error = value.mul_add(factor, -scaled);

    let is_tie = (scaled - scaled.trunc()).abs() == 0.5;
    let rounded = if is_tie && error != 0.0 && error.signum() != scaled.signum() {
        scaled.trunc()
    } else {
        scaled.round()
    };
    rounded / factor
}

/// `numerator / denominator`, or 0 when the denominator is not positive.
#[inline]
fn ratio_or_zero(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// Calculate with the standard bag weight and daily gain.
pub fn calculate(inputs: &Inputs, stages: &[Stage]) -> CalculationResult {
    calculate_with_config(inputs, stages, &CalcConfig::default())
}

/// Run the full pipeline: mode selection, feed engine, scenarios, assembly.
///
/// Pure and deterministic. Rounding happens only here, on final values.
pub fn calculate_with_config(
    inputs: &Inputs,
    stages: &[Stage],
    config: &CalcConfig,
) -> CalculationResult {
    let mode = select_mode(stages);

    let (totals, final_weight) = match mode {
        CalculationMode::Forecast => (
            forecast_feed(inputs.start_weight, inputs.target_weight, stages, config),
            inputs.target_weight,
        ),
        CalculationMode::Projection => {
            let totals = project_feed(stages, config);
            let final_weight = inputs.start_weight + totals.weight_gain;
            (totals, final_weight)
        }
    };

    assemble(mode, inputs, totals, final_weight, config)
}

fn assemble(
    mode: CalculationMode,
    inputs: &Inputs,
    totals: FeedTotals,
    final_weight: f64,
    config: &CalcConfig,
) -> CalculationResult {
    let total_other_costs = inputs.other_costs();
    let total_cost = totals.feed_cost + total_other_costs;

    let cost_per_kg_live_weight = ratio_or_zero(total_cost, final_weight);
    let number_of_days = if totals.weight_gain > 0.0 {
        ratio_or_zero(totals.weight_gain, config.average_daily_gain_kg)
    } else {
        0.0
    };
    let feed_cost_per_kg_gain = ratio_or_zero(totals.feed_cost, totals.weight_gain);

    let projected_final_weight = match mode {
        CalculationMode::Forecast => None,
        CalculationMode::Projection => Some(round_to(final_weight, OUTPUT_DECIMALS)),
    };

    debug!(%mode, total_cost, final_weight, "assembled result");

    CalculationResult {
        total_cost: round_to(total_cost, OUTPUT_DECIMALS),
        total_feed_cost: round_to(totals.feed_cost, OUTPUT_DECIMALS),
        total_other_costs: round_to(total_other_costs, OUTPUT_DECIMALS),
        cost_per_kg_live_weight: round_to(cost_per_kg_live_weight, OUTPUT_DECIMALS),
        total_feed_consumed: round_to(totals.feed_consumed, OUTPUT_DECIMALS),
        total_weight_gain: round_to(totals.weight_gain, OUTPUT_DECIMALS),
        stage_costs: totals.stage_costs,
        projected_final_weight,
        calculation_mode: mode,
        profit_scenarios: profit_scenarios(inputs.forecasted_hog_price, final_weight, total_cost),
        genetic_price: inputs.genetic_price,
        medicine_cost: inputs.medicine_cost,
        management_cost: inputs.management_cost,
        number_of_days: round_to(number_of_days, DAY_DECIMALS),
        feed_cost_per_kg_gain: round_to(feed_cost_per_kg_gain, OUTPUT_DECIMALS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.005_000_1, 2), 1.01);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_eq!(round_to(116.25, 0), 116.0);
        assert_eq!(round_to(50043.010752, 2), 50043.01);
    }

    #[test]
    fn test_round_to_uses_exact_value_near_half_cent() {
        // Both are stored slightly below the half cent.
        assert_eq!(round_to(55000.015, 2), 55000.01);
        assert_eq!(round_to(0.015, 2), 0.01);
        assert_eq!(round_to(-0.015, 2), -0.01);

        // Exactly representable ties still go away from zero.
        assert_eq!(round_to(0.125, 2), 0.13);
        assert_eq!(round_to(-0.125, 2), -0.13);
        assert_eq!(round_to(55000.125, 2), 55000.13);
    }

    #[test]
    fn test_zero_daily_gain_gives_zero_days() {
        let config = CalcConfig {
            average_daily_gain_kg: 0.0,
            ..Default::default()
        };
        let result = calculate_with_config(&Inputs::default(), &crate::models::FarmState::seed_stages(), &config);
        assert_eq!(result.number_of_days, 0.0);
        assert!(serde_json::to_value(&result).unwrap()["numberOfDays"].is_number());
    }

    #[test]
    fn test_overheads_round_on_exact_value() {
        let inputs = Inputs {
            target_weight: 0.0,
            genetic_price: 55000.015,
            medicine_cost: 0.0,
            management_cost: 0.0,
            ..Default::default()
        };
        let result = calculate(&inputs, &crate::models::FarmState::seed_stages());
        assert_eq!(result.total_other_costs, 55000.01);
        assert_eq!(result.total_cost, 55000.01);
        assert_eq!(result.genetic_price, 55000.015);
    }

    #[test]
    fn test_ratio_or_zero() {
        assert_eq!(ratio_or_zero(10.0, 0.0), 0.0);
        assert_eq!(ratio_or_zero(10.0, -1.0), 0.0);
        assert_eq!(ratio_or_zero(10.0, 4.0), 2.5);
    }

    #[test]
    fn test_custom_daily_gain() {
        let config = CalcConfig {
            average_daily_gain_kg: 1.0,
            ..Default::default()
        };
        let result = calculate_with_config(&Inputs::default(), &crate::models::FarmState::seed_stages(), &config);
        assert_eq!(result.number_of_days, 93.0);
    }

    #[test]
    fn test_zero_target_weight() {
        let inputs = Inputs {
            target_weight: 0.0,
            ..Default::default()
        };
        let result = calculate(&inputs, &crate::models::FarmState::seed_stages());
        assert_eq!(result.cost_per_kg_live_weight, 0.0);
        assert_eq!(result.total_weight_gain, 0.0);
        assert_eq!(result.number_of_days, 0.0);
        assert_eq!(result.feed_cost_per_kg_gain, 0.0);
        assert_eq!(result.total_cost, 1_300_000.0);
    }
}
