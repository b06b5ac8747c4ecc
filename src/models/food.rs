use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::safety::constants::{max_safe_hours, EXPIRING_SOON_HOURS};
use crate::safety::SafetyScore;

/// Serving category of a surplus food item.
///
/// Each type carries its own safe temperature band and maximum safe age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodType {
    Hot,
    Cold,
    Frozen,
}

impl FoodType {
    pub const ALL: [FoodType; 3] = [FoodType::Hot, FoodType::Cold, FoodType::Frozen];

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodType::Hot => "hot",
            FoodType::Cold => "cold",
            FoodType::Frozen => "frozen",
        }
    }
}

impl fmt::Display for FoodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FoodType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hot" => Ok(FoodType::Hot),
            "cold" => Ok(FoodType::Cold),
            "frozen" => Ok(FoodType::Frozen),
            other => Err(format!("unknown food type: {}", other)),
        }
    }
}

/// Input record for creating a food item (presence-only validation).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodData {
    pub name: String,
    pub restaurant_name: String,
    pub food_type: FoodType,
    /// Hours since preparation, supplied by the donor.
    pub preparation_time: f64,
    /// Current temperature in °F.
    pub temperature: f64,
    pub location: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A unit of surplus food offered by a restaurant.
///
/// `temperature` and `preparation_time` are fixed at creation; only
/// availability and the attached safety score change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: String,
    pub name: String,
    pub restaurant_name: String,
    pub food_type: FoodType,
    pub preparation_time: f64,
    pub temperature: f64,
    pub location: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub is_available: bool,
    #[serde(default)]
    pub safety_score: Option<SafetyScore>,
}

impl FoodItem {
    pub fn new(data: FoodData) -> Self {
        Self {
            id: super::generate_id("food"),
            name: data.name,
            restaurant_name: data.restaurant_name,
            food_type: data.food_type,
            preparation_time: data.preparation_time,
            temperature: data.temperature,
            location: data.location,
            image: data.image,
            description: data.description,
            created_at: Utc::now(),
            is_available: true,
            safety_score: None,
        }
    }

    /// Hours left before the item passes its type's maximum safe age.
    pub fn time_until_expiration(&self) -> f64 {
        (max_safe_hours(self.food_type) - self.preparation_time).max(0.0)
    }

    /// An item is safe once scored and graded above F.
    pub fn is_safe(&self) -> bool {
        self.safety_score
            .as_ref()
            .map(|s| !s.letter_grade.is_failing())
            .unwrap_or(false)
    }

    pub fn is_expiring_soon(&self) -> bool {
        self.time_until_expiration() <= EXPIRING_SOON_HOURS
    }

    /// Mark the item as claimed. Availability never comes back.
    pub fn claim(&mut self) {
        self.is_available = false;
    }
}
