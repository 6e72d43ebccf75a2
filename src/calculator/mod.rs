pub mod assembly;
pub mod constants;
pub mod forecast;
pub mod mode;
pub mod projection;
pub mod scenarios;

pub use assembly::{calculate, calculate_with_config, round_to, CalcConfig, FeedTotals};
pub use constants::*;
pub use forecast::forecast_feed;
pub use mode::select_mode;
pub use projection::project_feed;
pub use scenarios::profit_scenarios;
