/// Standard mass of one feed bag (kg).
pub const BAG_WEIGHT_KG: f64 = 25.0;

/// Benchmark average daily gain (kg/day) used to estimate days to target.
pub const AVERAGE_DAILY_GAIN_KG: f64 = 0.8;

/// Hog price scenarios as (label, multiplier), pessimistic first.
pub const PROFIT_SCENARIOS: [(&str, f64); 3] = [
    ("Pessimistic (-5%)", 0.95),
    ("Expected", 1.0),
    ("Optimistic (+5%)", 1.05),
];

// ─────────────────────────────────────────────────────────────────────────────
// Seed inputs
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_START_WEIGHT: f64 = 7.0;
pub const DEFAULT_TARGET_WEIGHT: f64 = 100.0;
pub const DEFAULT_GENETIC_PRICE: f64 = 1_200_000.0;
pub const DEFAULT_MEDICINE_COST: f64 = 50_000.0;
pub const DEFAULT_MANAGEMENT_COST: f64 = 50_000.0;

/// Forecasted sale price per kg of live weight.
pub const DEFAULT_HOG_PRICE: f64 = 55_000.0;

// ─────────────────────────────────────────────────────────────────────────────
// Output rounding
// ─────────────────────────────────────────────────────────────────────────────

/// Decimal places for money and weight outputs.
pub const OUTPUT_DECIMALS: u32 = 2;

/// Decimal places for the day count.
pub const DAY_DECIMALS: u32 = 0;
