use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RescueError, Result};
use crate::models::{FoodData, FoodItem, Person, PersonData};

/// Everything the CLI persists between invocations: both registries'
/// entities, in their insertion order.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default)]
    pub foods: Vec<FoodItem>,
    #[serde(default)]
    pub people: Vec<Person>,
}

/// Load the state file.
pub fn load_state<P: AsRef<Path>>(path: P) -> Result<AppState> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Save the state file, pretty-printed.
pub fn save_state<P: AsRef<Path>>(path: P, state: &AppState) -> Result<()> {
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json)?;
    Ok(())
}

#[derive(Debug, Deserialize)]
struct FoodCsvRecord {
    name: String,
    restaurant_name: String,
    food_type: String,
    preparation_time: f64,
    temperature: f64,
    location: String,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PersonCsvRecord {
    name: String,
    location: String,
    preference: String,
    #[serde(default)]
    max_distance: Option<f64>,
    /// Semicolon-separated list.
    #[serde(default)]
    dietary_restrictions: String,
}

/// Read food input records from a headered CSV file.
pub fn import_foods_csv<P: AsRef<Path>>(path: P) -> Result<Vec<FoodData>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut foods = Vec::new();

    for record in reader.deserialize() {
        let record: FoodCsvRecord = record?;
        let food_type = record.food_type.parse().map_err(RescueError::InvalidInput)?;
        foods.push(FoodData {
            name: record.name,
            restaurant_name: record.restaurant_name,
            food_type,
            preparation_time: record.preparation_time,
            temperature: record.temperature,
            location: record.location,
            image: None,
            description: record.description,
        });
    }

    Ok(foods)
}

/// Read person input records from a headered CSV file.
pub fn import_people_csv<P: AsRef<Path>>(path: P) -> Result<Vec<PersonData>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut people = Vec::new();

    for record in reader.deserialize() {
        let record: PersonCsvRecord = record?;
        let preference = record.preference.parse().map_err(RescueError::InvalidInput)?;
        let dietary_restrictions = record
            .dietary_restrictions
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        people.push(PersonData {
            name: record.name,
            location: record.location,
            preference,
            max_distance: record.max_distance,
            dietary_restrictions,
        });
    }

    Ok(people)
}
