use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{RescueError, Result};
use crate::models::{FoodData, FoodItem, FoodPreference, FoodType, PersonData};

/// Minimum similarity for a fuzzy food-name suggestion.
const FUZZY_MATCH_THRESHOLD: f64 = 0.75;

/// Resolve a typed food name against available items.
///
/// Exact case-insensitive match wins; otherwise the best fuzzy candidate
/// above the threshold. Returns the item's id.
pub fn resolve_food_name(available: &[&FoodItem], input: &str) -> Option<String> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    if let Some(item) = available
        .iter()
        .find(|f| f.name.to_lowercase() == needle)
    {
        return Some(item.id.clone());
    }

    available
        .iter()
        .map(|f| (f, jaro_winkler(&f.name.to_lowercase(), &needle)))
        .filter(|(_, similarity)| *similarity >= FUZZY_MATCH_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(item, _)| item.id.clone())
}

pub fn prompt_yes_no(question: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(question)
        .default(default)
        .interact()?)
}

fn prompt_number(prompt: &str, default: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .parse()
        .map_err(|_| RescueError::InvalidInput(format!("Invalid number: {}", input)))
}

/// Interactive entry of a new food item.
pub fn prompt_food_data() -> Result<FoodData> {
    let name: String = Input::new().with_prompt("Food name").interact_text()?;
    let restaurant_name: String = Input::new().with_prompt("Restaurant name").interact_text()?;

    let type_labels: Vec<&str> = FoodType::ALL.iter().map(|t| t.as_str()).collect();
    let type_index = Select::new()
        .with_prompt("Food type")
        .items(&type_labels)
        .default(0)
        .interact()?;
    let food_type = FoodType::ALL[type_index];

    let preparation_time = prompt_number("Hours since preparation", "0")?;
    let temperature = prompt_number("Current temperature (°F)", "70")?;

    let location: String = Input::new().with_prompt("Pickup location").interact_text()?;

    let description: String = Input::new()
        .with_prompt("Description (optional)")
        .allow_empty(true)
        .interact_text()?;
    let description = if description.trim().is_empty() {
        None
    } else {
        Some(description.trim().to_string())
    };

    Ok(FoodData {
        name,
        restaurant_name,
        food_type,
        preparation_time,
        temperature,
        location,
        image: None,
        description,
    })
}

/// Interactive registration of a person.
pub fn prompt_person_data() -> Result<PersonData> {
    let name: String = Input::new().with_prompt("Name").interact_text()?;
    let location: String = Input::new().with_prompt("Location").interact_text()?;

    let preference_labels: Vec<&str> = FoodPreference::ALL.iter().map(|p| p.as_str()).collect();
    let preference_index = Select::new()
        .with_prompt("Preferred food type")
        .items(&preference_labels)
        .default(0)
        .interact()?;
    let preference = FoodPreference::ALL[preference_index];

    let max_distance = prompt_number("Maximum pickup distance (miles)", "10")?;

    let mut dietary_restrictions = Vec::new();
    loop {
        let input: String = Input::new()
            .with_prompt("Dietary restriction (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }
        dietary_restrictions.push(input.to_string());
        println!("Added restriction: {}", input);
    }

    Ok(PersonData {
        name,
        location,
        preference,
        max_distance: Some(max_distance),
        dietary_restrictions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodData;

    fn make_food(name: &str) -> FoodItem {
        FoodItem::new(FoodData {
            name: name.to_string(),
            restaurant_name: "Test Kitchen".to_string(),
            food_type: FoodType::Hot,
            preparation_time: 1.0,
            temperature: 150.0,
            location: "Downtown".to_string(),
            image: None,
            description: None,
        })
    }

    #[test]
    fn test_resolve_exact_match_case_insensitive() {
        let soup = make_food("Lentil Soup");
        let salad = make_food("Caesar Salad");
        let available = vec![&soup, &salad];

        assert_eq!(resolve_food_name(&available, "lentil soup"), Some(soup.id.clone()));
        assert_eq!(resolve_food_name(&available, "CAESAR SALAD"), Some(salad.id.clone()));
    }

    #[test]
    fn test_resolve_fuzzy_match() {
        let soup = make_food("Lentil Soup");
        let available = vec![&soup];

        assert_eq!(resolve_food_name(&available, "lentil sop"), Some(soup.id.clone()));
    }

    #[test]
    fn test_resolve_rejects_poor_matches() {
        let soup = make_food("Lentil Soup");
        let available = vec![&soup];

        assert_eq!(resolve_food_name(&available, "pizza"), None);
        assert_eq!(resolve_food_name(&available, ""), None);
    }
}
