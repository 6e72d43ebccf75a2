pub mod export;
pub mod prompts;
pub mod render;

pub use export::write_stage_costs_csv;
pub use prompts::{edit_state, prompt_bags, prompt_inputs, prompt_number, prompt_yes_no};
pub use render::{display_result, display_state, format_amount};
