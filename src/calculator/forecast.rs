use tracing::debug;

use crate::calculator::assembly::{CalcConfig, FeedTotals};
use crate::models::Stage;

/// Estimate feed needs to grow from `start_weight` to `target_weight`.
///
/// Each stage is clipped to the target and only its first feed is used.
/// The first stage starts at the larger of the given start weight and its
/// own declared start. Stages already passed contribute nothing.
pub fn forecast_feed(
    start_weight: f64,
    target_weight: f64,
    stages: &[Stage],
    config: &CalcConfig,
) -> FeedTotals {
    let mut totals = FeedTotals::default();

    let effective_start = match stages.first() {
        Some(first) => start_weight.max(first.start_weight),
        None => start_weight,
    };

    for (index, stage) in stages.iter().enumerate() {
        let Some(feed) = stage.primary_feed() else {
            continue;
        };

        let stage_start = if index == 0 {
            effective_start
        } else {
            stage.start_weight
        };
        let stage_end = stage.end_weight.min(target_weight);

        if stage_start >= stage_end {
            debug!(stage = %stage.name, stage_start, stage_end, "stage outside target range");
            continue;
        }

        let weight_gain = stage_end - stage_start;
        let feed_kg = weight_gain * feed.fcr;
        let cost = feed_kg * (feed.price_per_bag / config.bag_weight_kg);

        debug!(stage = %stage.name, weight_gain, feed_kg, cost, "forecast stage");
        totals.add(stage, feed, cost, feed_kg, weight_gain);
    }

    totals
}
