use clap::Parser;
use std::path::Path;

use hog_cost_calc_rs::calculator::CalcConfig;
use hog_cost_calc_rs::cli::{Cli, Command};
use hog_cost_calc_rs::error::{CalcError, Result};
use hog_cost_calc_rs::interface::{
    display_result, display_state, edit_state, prompt_yes_no, write_stage_costs_csv,
};
use hog_cost_calc_rs::logging;
use hog_cost_calc_rs::models::FarmState;
use hog_cost_calc_rs::state::{load_or_default, save_state, share_link, FarmStateManager};

fn main() {
    logging::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = calc_config(&cli)?;
    let path = Path::new(&cli.file);
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Calc { json } => cmd_calc(path, &config, json),
        Command::Show => {
            display_state(&load_or_default(path)?);
            Ok(())
        }
        Command::Init { force } => cmd_init(path, force),
        Command::Share { base_url } => cmd_share(path, base_url.as_deref()),
        Command::Load { token } => cmd_load(path, &token),
        Command::SetBags { stage, feed, bags } => edit_file(path, |m| {
            m.set_bags(&stage, feed.as_deref(), bags)?;
            println!("Recorded {} bags for {}.", bags, stage);
            Ok(())
        }),
        Command::AddFeed {
            stage,
            code,
            price,
            fcr,
        } => edit_file(path, |m| {
            let id = m.add_feed(&stage, &code, price, fcr)?;
            println!("Added feed {} ({}) to {}.", code, id, stage);
            Ok(())
        }),
        Command::ResetBags => edit_file(path, |m| {
            m.reset_bags();
            println!("Cleared all bags consumed.");
            Ok(())
        }),
        Command::Edit => cmd_edit(path, &config),
        Command::Export { csv } => cmd_export(path, &config, Path::new(&csv)),
    }
}

fn calc_config(cli: &Cli) -> Result<CalcConfig> {
    if !(cli.bag_weight > 0.0) {
        return Err(CalcError::InvalidInput("--bag-weight must be > 0".to_string()));
    }
    if !(cli.adg > 0.0) {
        return Err(CalcError::InvalidInput("--adg must be > 0".to_string()));
    }
    Ok(CalcConfig {
        bag_weight_kg: cli.bag_weight,
        average_daily_gain_kg: cli.adg,
    })
}

/// Load, modify, and save the state file.
fn edit_file<F>(path: &Path, f: F) -> Result<()>
where
    F: FnOnce(&mut FarmStateManager) -> Result<()>,
{
    let mut manager = FarmStateManager::new(load_or_default(path)?);
    f(&mut manager)?;
    save_state(path, manager.state())
}

/// Calculate and display results for the saved state.
fn cmd_calc(path: &Path, config: &CalcConfig, json: bool) -> Result<()> {
    if !path.exists() {
        eprintln!("State file not found: {} (using defaults)", path.display());
    }

    let manager = FarmStateManager::new(load_or_default(path)?);
    let result = manager.calculate(config);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        display_result(&result);
    }
    Ok(())
}

/// Write the default state file.
fn cmd_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        println!("{} already exists. Use --force to overwrite.", path.display());
        return Ok(());
    }

    save_state(path, &FarmState::default())?;
    println!("Wrote default state to {}.", path.display());
    Ok(())
}

/// Print a token or link for the current state.
fn cmd_share(path: &Path, base_url: Option<&str>) -> Result<()> {
    let manager = FarmStateManager::new(load_or_default(path)?);

    match base_url {
        Some(url) => println!("{}", share_link(url, manager.state())),
        None => println!("{}", manager.share_token()),
    }
    Ok(())
}

/// Replace the state file with a shared state. Bad tokens leave it as is.
fn cmd_load(path: &Path, token: &str) -> Result<()> {
    let mut manager = FarmStateManager::new(load_or_default(path)?);

    if !manager.load_shared(token) {
        eprintln!("Could not read the shared link; state file unchanged.");
        return Ok(());
    }

    save_state(path, manager.state())?;
    println!("Loaded shared calculation into {}.", path.display());
    display_state(manager.state());
    Ok(())
}

/// Interactive editing, then calculation.
fn cmd_edit(path: &Path, config: &CalcConfig) -> Result<()> {
    let mut manager = FarmStateManager::new(load_or_default(path)?);
    display_state(manager.state());

    let edited = edit_state(manager.state())?;
    *manager.state_mut() = edited;

    display_result(&manager.calculate(config));

    if prompt_yes_no("Save updated state?", true)? {
        save_state(path, manager.state())?;
        println!("State saved.");
    }
    Ok(())
}

/// Export itemized stage costs to CSV.
fn cmd_export(path: &Path, config: &CalcConfig, csv_path: &Path) -> Result<()> {
    let manager = FarmStateManager::new(load_or_default(path)?);
    let result = manager.calculate(config);

    write_stage_costs_csv(&result, csv_path)?;
    println!(
        "Wrote {} stage cost rows to {}.",
        result.stage_costs.len(),
        csv_path.display()
    );
    Ok(())
}
