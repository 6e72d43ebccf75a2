mod feed;
mod result;
mod state;

pub use feed::{Feed, Stage};
pub use result::{CalculationMode, CalculationResult, ProfitScenario, StageCostDetail};
pub use state::{FarmState, Inputs};

pub(crate) use feed::fresh_id;
