use tracing::debug;

use crate::calculator::assembly::{CalcConfig, FeedTotals};
use crate::models::Stage;

/// Compute feed totals from the bags actually consumed.
///
/// Every feed of every stage participates. A feed with FCR 0 still adds
/// cost and feed mass but no weight gain.
pub fn project_feed(stages: &[Stage], config: &CalcConfig) -> FeedTotals {
    let mut totals = FeedTotals::default();

    for stage in stages {
        for feed in stage.feeds.iter().filter(|f| f.is_consumed()) {
            let feed_kg = feed.bags_consumed * config.bag_weight_kg;
            let cost = feed.bags_consumed * feed.price_per_bag;
            let weight_gain = if feed.fcr > 0.0 { feed_kg / feed.fcr } else { 0.0 };

            debug!(
                stage = %stage.name,
                feed = %feed.product_code,
                bags = feed.bags_consumed,
                weight_gain,
                cost,
                "projected feed"
            );
            totals.add(stage, feed, cost, feed_kg, weight_gain);
        }
    }

    totals
}
