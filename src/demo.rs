//! Built-in demo dataset for the `seed` command.

use crate::models::{FoodData, FoodPreference, FoodType, PersonData};

fn food(
    name: &str,
    restaurant: &str,
    food_type: FoodType,
    prep: f64,
    temp: f64,
    location: &str,
    description: &str,
) -> FoodData {
    FoodData {
        name: name.to_string(),
        restaurant_name: restaurant.to_string(),
        food_type,
        preparation_time: prep,
        temperature: temp,
        location: location.to_string(),
        image: None,
        description: Some(description.to_string()),
    }
}

fn person(name: &str, location: &str, preference: FoodPreference) -> PersonData {
    PersonData {
        name: name.to_string(),
        location: location.to_string(),
        preference,
        max_distance: None,
        dietary_restrictions: vec![],
    }
}

/// Demo food offerings spanning all types and safety grades.
pub fn sample_foods() -> Vec<FoodData> {
    vec![
        food(
            "Chicken Alfredo Pasta",
            "Mama Mia Restaurant",
            FoodType::Hot,
            1.5,
            145.0,
            "Downtown",
            "Creamy alfredo sauce with tender chicken over pasta",
        ),
        food(
            "Caesar Salad",
            "Green Garden Cafe",
            FoodType::Cold,
            0.5,
            38.0,
            "Midtown",
            "Fresh romaine lettuce with parmesan cheese and croutons",
        ),
        food(
            "Chocolate Ice Cream",
            "Sweet Treats",
            FoodType::Frozen,
            2.0,
            15.0,
            "Uptown",
            "Rich chocolate ice cream with chocolate chips",
        ),
        food(
            "Beef Stir Fry",
            "Dragon Palace",
            FoodType::Hot,
            3.5,
            120.0,
            "Eastside",
            "Tender beef strips with fresh vegetables in savory sauce",
        ),
        food(
            "Margherita Pizza",
            "Pizza Corner",
            FoodType::Hot,
            2.5,
            135.0,
            "Westside",
            "Classic pizza with fresh mozzarella, tomatoes, and basil",
        ),
        food(
            "Fresh Fruit Bowl",
            "Healthy Bites",
            FoodType::Cold,
            1.0,
            40.0,
            "Downtown",
            "Seasonal fresh fruits including berries, melon, and citrus",
        ),
        food(
            "Fish & Chips",
            "The British Pub",
            FoodType::Hot,
            4.0,
            110.0,
            "Old Town",
            "Crispy battered fish with golden chips and mushy peas",
        ),
        food(
            "Vanilla Ice Cream",
            "Sweet Treats",
            FoodType::Frozen,
            1.5,
            20.0,
            "Uptown",
            "Smooth vanilla ice cream with real vanilla bean specks",
        ),
        food(
            "Chicken Teriyaki Bowl",
            "Tokyo Express",
            FoodType::Hot,
            2.0,
            140.0,
            "Chinatown",
            "Grilled chicken with teriyaki sauce over steamed rice",
        ),
        food(
            "Mediterranean Wrap",
            "Sunshine Cafe",
            FoodType::Cold,
            0.8,
            42.0,
            "Riverside",
            "Fresh vegetables, hummus, and feta in a soft tortilla wrap",
        ),
    ]
}

/// Demo recipients covering every preference.
pub fn sample_people() -> Vec<PersonData> {
    vec![
        person("John Smith", "Downtown", FoodPreference::Hot),
        person("Sarah Johnson", "Midtown", FoodPreference::Any),
        person("Mike Chen", "Uptown", FoodPreference::Cold),
        person("Lisa Davis", "Eastside", FoodPreference::Frozen),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::FoodMatcher;
    use crate::safety::{HandlingReport, StorageReport};
    use crate::state::{FoodRegistry, PersonRegistry};

    #[test]
    fn test_demo_dataset_produces_matches() {
        let mut foods = FoodRegistry::new();
        for data in sample_foods() {
            foods.add(data);
        }
        foods.refresh_all_safety_scores(&HandlingReport::default(), &StorageReport::default());

        let mut people = PersonRegistry::new();
        for data in sample_people() {
            people.add(data);
        }

        let mut matcher = FoodMatcher::new();
        let records = matcher.find_matches(&foods, &mut people);

        // All four demo people find food in the demo surplus.
        assert_eq!(records.len(), 4);
    }
}
