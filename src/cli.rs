use clap::{Parser, Subcommand};

/// FoodRescue — matches surplus restaurant food with people, scored for safety.
#[derive(Parser, Debug)]
#[command(name = "food_rescue")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the rescue state JSON file.
    #[arg(short, long, default_value = "rescue_state.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Refresh safety scores, run the matcher, and show the results.
    Run,

    /// Add a food item interactively.
    AddFood,

    /// Register a person interactively.
    AddPerson,

    /// List food items and people.
    List,

    /// Refresh and display safety scores for all available food.
    Scores,

    /// Mark a food item as claimed by name.
    Claim {
        /// Food name to claim (fuzzy-matched against available items).
        name: String,
    },

    /// Import foods and/or people from CSV files.
    Import {
        /// CSV file of food items.
        #[arg(long)]
        foods: Option<String>,

        /// CSV file of people.
        #[arg(long)]
        people: Option<String>,
    },

    /// Write the built-in demo dataset to the state file.
    Seed,
}

impl Default for Command {
    fn default() -> Self {
        Command::Run
    }
}
