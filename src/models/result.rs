use serde::{Deserialize, Serialize};

/// How the calculation was driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculationMode {
    /// Target weight and FCR drive feed needs.
    Forecast,
    /// Actual bags consumed drive weight gain.
    Projection,
}

impl CalculationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalculationMode::Forecast => "forecast",
            CalculationMode::Projection => "projection",
        }
    }
}

impl std::fmt::Display for CalculationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Itemized cost of one feed within one stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageCostDetail {
    pub name: String,
    pub cost: f64,
    pub feed: String,
    pub feed_kg: f64,
    pub price_per_bag: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitScenario {
    pub scenario: String,
    pub hog_price: f64,
    pub revenue: f64,
    pub profit: f64,
}

/// Snapshot produced by one calculation. All figures are rounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub total_cost: f64,
    pub total_feed_cost: f64,
    pub total_other_costs: f64,
    pub cost_per_kg_live_weight: f64,
    pub total_feed_consumed: f64,
    pub total_weight_gain: f64,
    pub stage_costs: Vec<StageCostDetail>,
    /// Only set in projection mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projected_final_weight: Option<f64>,
    pub calculation_mode: CalculationMode,
    pub profit_scenarios: Vec<ProfitScenario>,
    pub genetic_price: f64,
    pub medicine_cost: f64,
    pub management_cost: f64,
    pub number_of_days: f64,
    pub feed_cost_per_kg_gain: f64,
}
