use dialoguer::{Confirm, Input};

use crate::error::{CalcError, Result};
use crate::models::{FarmState, Inputs};

/// Prompt for a number, showing the current value as default.
pub fn prompt_number(prompt: &str, current: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(current.to_string())
        .interact_text()?;

    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| CalcError::InvalidInput(format!("Invalid number: {}", input)))?;

    if !value.is_finite() {
        return Err(CalcError::InvalidInput(format!("Invalid number: {}", input)));
    }
    Ok(value)
}

/// Prompt for the scalar inputs.
pub fn prompt_inputs(current: &Inputs) -> Result<Inputs> {
    Ok(Inputs {
        start_weight: prompt_number("Start weight (kg)", current.start_weight)?,
        target_weight: prompt_number("Target weight (kg)", current.target_weight)?,
        genetic_price: prompt_number("Genetic price", current.genetic_price)?,
        medicine_cost: prompt_number("Medicine cost", current.medicine_cost)?,
        management_cost: prompt_number("Management cost", current.management_cost)?,
        forecasted_hog_price: prompt_number("Forecasted hog price (per kg)", current.forecasted_hog_price)?,
    })
}

/// Prompt for bags consumed of every feed. Leave all at 0 for a forecast.
pub fn prompt_bags(state: &mut FarmState) -> Result<()> {
    for stage in &mut state.stages {
        for feed in &mut stage.feeds {
            let prompt = format!("{} / {}: bags consumed", stage.name, feed.product_code);
            let bags = prompt_number(&prompt, feed.bags_consumed)?;
            if bags < 0.0 {
                return Err(CalcError::InvalidInput(
                    "Bags consumed must be >= 0".to_string(),
                ));
            }
            feed.bags_consumed = bags;
        }
    }
    Ok(())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Walk through the whole state interactively. Returns the edited copy.
pub fn edit_state(current: &FarmState) -> Result<FarmState> {
    let mut state = current.clone();
    state.inputs = prompt_inputs(&current.inputs)?;

    if prompt_yes_no("Enter actual bags consumed?", false)? {
        prompt_bags(&mut state)?;
    }
    Ok(state)
}
