use tracing::debug;

use crate::models::{CalculationMode, Stage};

/// Pick the calculation mode from the data.
///
/// Any feed with bags consumed forces projection, even if every other
/// stage is empty.
pub fn select_mode(stages: &[Stage]) -> CalculationMode {
    let consumed = stages
        .iter()
        .flat_map(|s| s.feeds.iter())
        .filter(|f| f.is_consumed())
        .count();

    let mode = if consumed > 0 {
        CalculationMode::Projection
    } else {
        CalculationMode::Forecast
    };
    debug!(%mode, consumed_feeds = consumed, "selected calculation mode");
    mode
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FarmState, Feed};

    #[test]
    fn test_seed_is_forecast() {
        assert_eq!(select_mode(&FarmState::seed_stages()), CalculationMode::Forecast);
    }

    #[test]
    fn test_single_bag_forces_projection() {
        let mut stages = FarmState::seed_stages();
        stages[2].feeds[0].bags_consumed = 1.0;
        assert_eq!(select_mode(&stages), CalculationMode::Projection);
    }

    #[test]
    fn test_secondary_feed_counts() {
        let mut stages = FarmState::seed_stages();
        let mut extra = Feed::new("x", "G-Premium", 600000.0, 2.0);
        extra.bags_consumed = 0.5;
        stages[1].feeds.push(extra);
        assert_eq!(select_mode(&stages), CalculationMode::Projection);
    }

    #[test]
    fn test_empty_and_negative() {
        assert_eq!(select_mode(&[]), CalculationMode::Forecast);

        let mut stages = FarmState::seed_stages();
        stages[0].feeds[0].bags_consumed = -3.0;
        assert_eq!(select_mode(&stages), CalculationMode::Forecast);
    }
}
