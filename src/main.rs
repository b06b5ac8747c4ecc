use clap::Parser;
use std::path::Path;

use food_rescue_rs::cli::{Cli, Command};
use food_rescue_rs::demo;
use food_rescue_rs::error::Result;
use food_rescue_rs::interface::{
    display_foods, display_matches, display_people, display_score_details, display_stats,
    prompt_food_data, prompt_person_data, prompt_yes_no, resolve_food_name,
};
use food_rescue_rs::matcher::FoodMatcher;
use food_rescue_rs::safety::{HandlingReport, StorageReport};
use food_rescue_rs::state::{
    import_foods_csv, import_people_csv, load_state, save_state, AppState, FoodRegistry,
    PersonRegistry,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Run => cmd_run(&cli.file),
        Command::AddFood => cmd_add_food(&cli.file),
        Command::AddPerson => cmd_add_person(&cli.file),
        Command::List => cmd_list(&cli.file),
        Command::Scores => cmd_scores(&cli.file),
        Command::Claim { name } => cmd_claim(&cli.file, &name),
        Command::Import { foods, people } => cmd_import(&cli.file, foods, people),
        Command::Seed => cmd_seed(&cli.file),
    }
}

fn load_registries(file_path: &str) -> Result<(FoodRegistry, PersonRegistry)> {
    let path = Path::new(file_path);
    let state = if path.exists() {
        load_state(path)?
    } else {
        AppState::default()
    };

    Ok((
        FoodRegistry::from_items(state.foods),
        PersonRegistry::from_people(state.people),
    ))
}

fn save_registries(file_path: &str, foods: &FoodRegistry, people: &PersonRegistry) -> Result<()> {
    let state = AppState {
        foods: foods.to_items(),
        people: people.to_people(),
    };
    save_state(file_path, &state)
}

/// Refresh scores, run the matcher, display results.
fn cmd_run(file_path: &str) -> Result<()> {
    let (mut foods, mut people) = load_registries(file_path)?;

    if foods.available().is_empty() {
        println!("No food available. Use 'seed', 'add-food', or 'import' first.");
        return Ok(());
    }
    if people.active().is_empty() {
        println!("No active people registered. Use 'seed' or 'add-person' first.");
        return Ok(());
    }

    foods.refresh_all_safety_scores(&HandlingReport::default(), &StorageReport::default());

    let mut matcher = FoodMatcher::new();
    let records = matcher.find_matches(&foods, &mut people);

    display_matches(&records);
    let stats = matcher.stats(&foods, &people);
    let suggestions = matcher.improvement_suggestions(&foods, &people);
    display_stats(&stats, &suggestions);

    if !records.is_empty() {
        let claim = prompt_yes_no("Claim matched food and save?", true)?;
        if claim {
            for record in &records {
                foods.claim(&record.food_id);
            }
            save_registries(file_path, &foods, &people)?;
            println!("Claimed {} items. State saved.", records.len());
        }
    }

    Ok(())
}

/// Add a food item interactively.
fn cmd_add_food(file_path: &str) -> Result<()> {
    let (mut foods, people) = load_registries(file_path)?;

    let data = prompt_food_data()?;
    let item = foods.add(data);
    println!("Added {} ({})", item.name, item.id);

    save_registries(file_path, &foods, &people)
}

/// Register a person interactively.
fn cmd_add_person(file_path: &str) -> Result<()> {
    let (foods, mut people) = load_registries(file_path)?;

    let data = prompt_person_data()?;
    let person = people.add(data);
    println!("Registered {} ({})", person.name, person.id);

    save_registries(file_path, &foods, &people)
}

/// List food and people.
fn cmd_list(file_path: &str) -> Result<()> {
    let (foods, people) = load_registries(file_path)?;

    display_foods(&foods.available(), "Available food");
    display_people(&people.active(), "Active people");

    let food_stats = foods.stats();
    if food_stats.claimed > 0 {
        println!("({} items already claimed)", food_stats.claimed);
    }

    Ok(())
}

/// Refresh and show safety scores.
fn cmd_scores(file_path: &str) -> Result<()> {
    let (mut foods, people) = load_registries(file_path)?;

    if foods.available().is_empty() {
        println!("No food available to score.");
        return Ok(());
    }

    foods.refresh_all_safety_scores(&HandlingReport::default(), &StorageReport::default());
    display_score_details(&foods.by_safety_score());

    let expiring = foods.expiring_soon();
    if !expiring.is_empty() {
        println!("{} items expiring within the hour:", expiring.len());
        for item in expiring {
            println!("  - {} ({:.1}h left)", item.name, item.time_until_expiration());
        }
    }

    save_registries(file_path, &foods, &people)
}

/// Claim a food item by (fuzzy-matched) name.
fn cmd_claim(file_path: &str, name: &str) -> Result<()> {
    let (mut foods, people) = load_registries(file_path)?;

    let available = foods.available();
    let Some(id) = resolve_food_name(&available, name) else {
        println!("No available food matching '{}'.", name);
        return Ok(());
    };

    let item_name = foods.get(&id).map(|f| f.name.clone()).unwrap_or_default();
    let confirmed = prompt_yes_no(&format!("Claim '{}'?", item_name), true)?;
    if !confirmed {
        return Ok(());
    }

    if foods.claim(&id) {
        save_registries(file_path, &foods, &people)?;
        println!("Claimed {}. State saved.", item_name);
    }

    Ok(())
}

/// Bulk-import foods and/or people from CSV.
fn cmd_import(file_path: &str, foods_csv: Option<String>, people_csv: Option<String>) -> Result<()> {
    if foods_csv.is_none() && people_csv.is_none() {
        println!("Please specify at least one of --foods or --people.");
        return Ok(());
    }

    let (mut foods, mut people) = load_registries(file_path)?;

    if let Some(csv_path) = foods_csv {
        let records = import_foods_csv(&csv_path)?;
        let count = records.len();
        for data in records {
            foods.add(data);
        }
        println!("Imported {} food items from {}", count, csv_path);
    }

    if let Some(csv_path) = people_csv {
        let records = import_people_csv(&csv_path)?;
        let count = records.len();
        for data in records {
            people.add(data);
        }
        println!("Imported {} people from {}", count, csv_path);
    }

    save_registries(file_path, &foods, &people)?;
    println!("State saved.");
    Ok(())
}

/// Seed the state file with the demo dataset.
fn cmd_seed(file_path: &str) -> Result<()> {
    let path = Path::new(file_path);
    if path.exists() {
        let overwrite = prompt_yes_no("State file exists. Overwrite with demo data?", false)?;
        if !overwrite {
            return Ok(());
        }
    }

    let mut foods = FoodRegistry::new();
    for data in demo::sample_foods() {
        foods.add(data);
    }
    foods.refresh_all_safety_scores(&HandlingReport::default(), &StorageReport::default());

    let mut people = PersonRegistry::new();
    for data in demo::sample_people() {
        people.add(data);
    }

    save_registries(file_path, &foods, &people)?;
    println!(
        "Seeded {} food items and {} people into {}",
        foods.len(),
        people.len(),
        file_path
    );
    Ok(())
}
