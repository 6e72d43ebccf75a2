pub mod calculator;
pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod state;

pub use calculator::{calculate, calculate_with_config, CalcConfig};
pub use error::{CalcError, Result};
pub use models::{CalculationMode, CalculationResult, FarmState, Feed, Inputs, Stage};
