use clap::{Parser, Subcommand};

use crate::calculator::{AVERAGE_DAILY_GAIN_KG, BAG_WEIGHT_KG};

/// hog_cost — feeding-cost and profit calculator for raising swine.
#[derive(Parser, Debug)]
#[command(name = "hog_cost")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the farm state JSON file.
    #[arg(short, long, default_value = "farm_state.json")]
    pub file: String,

    /// Standard feed bag weight in kg.
    #[arg(long, default_value_t = BAG_WEIGHT_KG)]
    pub bag_weight: f64,

    /// Average daily gain in kg/day, used to estimate days.
    #[arg(long, default_value_t = AVERAGE_DAILY_GAIN_KG)]
    pub adg: f64,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Calculate costs and profit for the current state.
    Calc {
        /// Print the result as JSON instead of a report.
        #[arg(long)]
        json: bool,
    },

    /// Show the current inputs and stages.
    Show,

    /// Write the default state file.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },

    /// Print a share token, or a full link with --base-url.
    Share {
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Load a shared token or link into the state file.
    Load {
        /// Token or link containing `#<token>`.
        token: String,
    },

    /// Record bags of feed consumed (switches to projection mode).
    SetBags {
        /// Stage name (fuzzy matched).
        #[arg(long)]
        stage: String,

        /// Feed id or product code. Defaults to the stage's first feed.
        #[arg(long)]
        feed: Option<String>,

        #[arg(long)]
        bags: f64,
    },

    /// Add a feed product to a stage.
    AddFeed {
        #[arg(long)]
        stage: String,

        #[arg(long)]
        code: String,

        /// Price per bag.
        #[arg(long)]
        price: f64,

        /// Feed conversion ratio (kg feed per kg gain).
        #[arg(long)]
        fcr: f64,
    },

    /// Clear all bags consumed (back to forecast mode).
    ResetBags,

    /// Edit inputs and bag counts interactively.
    Edit,

    /// Export itemized stage costs.
    Export {
        /// Output CSV path.
        #[arg(long, default_value = "stage_costs.csv")]
        csv: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Calc { json: false }
    }
}
