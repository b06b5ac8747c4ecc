use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{FoodItem, FoodType};

/// Default pickup radius in miles when none is given.
pub const DEFAULT_MAX_DISTANCE: f64 = 10.0;

/// What kinds of food a person is willing to take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodPreference {
    Any,
    Hot,
    Cold,
    Frozen,
}

impl FoodPreference {
    pub const ALL: [FoodPreference; 4] = [
        FoodPreference::Any,
        FoodPreference::Hot,
        FoodPreference::Cold,
        FoodPreference::Frozen,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodPreference::Any => "any",
            FoodPreference::Hot => "hot",
            FoodPreference::Cold => "cold",
            FoodPreference::Frozen => "frozen",
        }
    }

    pub fn accepts(&self, food_type: FoodType) -> bool {
        match self {
            FoodPreference::Any => true,
            FoodPreference::Hot => food_type == FoodType::Hot,
            FoodPreference::Cold => food_type == FoodType::Cold,
            FoodPreference::Frozen => food_type == FoodType::Frozen,
        }
    }
}

impl fmt::Display for FoodPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FoodPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "any" => Ok(FoodPreference::Any),
            "hot" => Ok(FoodPreference::Hot),
            "cold" => Ok(FoodPreference::Cold),
            "frozen" => Ok(FoodPreference::Frozen),
            other => Err(format!("unknown food preference: {}", other)),
        }
    }
}

/// Input record for registering a person.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonData {
    pub name: String,
    pub location: String,
    pub preference: FoodPreference,
    #[serde(default)]
    pub max_distance: Option<f64>,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
}

/// A recipient looking for surplus food.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub location: String,
    pub preference: FoodPreference,
    pub max_distance: f64,
    pub dietary_restrictions: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
    /// Weak reference to the matched food; the registry owns the entity.
    #[serde(default)]
    pub matched_food_id: Option<String>,
}

impl Person {
    pub fn new(data: PersonData) -> Self {
        Self {
            id: super::generate_id("person"),
            name: data.name,
            location: data.location,
            preference: data.preference,
            max_distance: data.max_distance.unwrap_or(DEFAULT_MAX_DISTANCE),
            dietary_restrictions: data.dietary_restrictions,
            created_at: Utc::now(),
            is_active: true,
            matched_food_id: None,
        }
    }

    pub fn can_accept(&self, food_type: FoodType) -> bool {
        self.preference.accepts(food_type)
    }

    /// Coarse allergen proxy: a restriction conflicts when it appears as a
    /// case-insensitive substring of the food's name.
    pub fn has_dietary_conflict(&self, food: &FoodItem) -> bool {
        if self.dietary_restrictions.is_empty() {
            return false;
        }
        let food_name = food.name.to_lowercase();
        self.dietary_restrictions
            .iter()
            .any(|r| food_name.contains(&r.to_lowercase()))
    }

    pub fn match_with_food(&mut self, food_id: &str) {
        self.matched_food_id = Some(food_id.to_string());
    }

    pub fn clear_match(&mut self) {
        self.matched_food_id = None;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    pub fn reactivate(&mut self) {
        self.is_active = true;
    }
}
