use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{FoodItem, Person};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    #[default]
    Active,
}

/// A committed 1:1 pairing produced by one matcher run.
///
/// Carries display snapshots of both entities taken at commit time; the
/// registries stay the owners of the live state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: String,
    pub food_id: String,
    pub person_id: String,
    pub food: FoodItem,
    pub person: Person,
    pub match_score: f64,
    pub created_at: DateTime<Utc>,
    pub status: MatchStatus,
}

impl MatchRecord {
    pub fn new(food: &FoodItem, person: &Person, match_score: f64) -> Self {
        Self {
            id: match_id(&food.id, &person.id),
            food_id: food.id.clone(),
            person_id: person.id.clone(),
            food: food.clone(),
            person: person.clone(),
            match_score,
            created_at: Utc::now(),
            status: MatchStatus::Active,
        }
    }
}

/// Synthesized match id shared by records and the matcher's query surface.
pub(crate) fn match_id(food_id: &str, person_id: &str) -> String {
    format!("match_{}_{}", food_id, person_id)
}
