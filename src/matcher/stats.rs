use serde::{Deserialize, Serialize};

use crate::matcher::FoodMatcher;
use crate::state::{FoodRegistry, PersonRegistry};

/// Outcome statistics for the current match state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchStats {
    pub total_food: usize,
    pub total_people: usize,
    pub matched_food: usize,
    pub matched_people: usize,
    pub unmatched_food: usize,
    pub unmatched_people: usize,
    /// Percentage of available food that found a recipient.
    pub match_rate: f64,
}

impl FoodMatcher {
    pub fn stats(&self, foods: &FoodRegistry, people: &PersonRegistry) -> MatchStats {
        let total_food = foods.available().len();
        let total_people = people.active().len();
        let matched_food = self.matched_food_count();
        let matched_people = self.matched_person_count();

        let match_rate = if total_food > 0 {
            (matched_food as f64 / total_food as f64) * 100.0
        } else {
            0.0
        };

        MatchStats {
            total_food,
            total_people,
            matched_food,
            matched_people,
            unmatched_food: total_food.saturating_sub(matched_food),
            unmatched_people: total_people.saturating_sub(matched_people),
            match_rate,
        }
    }

    /// Heuristic advice derived from the current stats.
    pub fn improvement_suggestions(
        &self,
        foods: &FoodRegistry,
        people: &PersonRegistry,
    ) -> Vec<String> {
        let stats = self.stats(foods, people);
        let mut suggestions = Vec::new();

        if stats.match_rate < 50.0 {
            suggestions
                .push("Consider adding more people or food items to improve match rate".to_string());
        }

        if stats.unmatched_food > stats.unmatched_people {
            suggestions.push("More people needed - consider promoting the app".to_string());
        }

        if stats.unmatched_people > stats.unmatched_food {
            suggestions.push("More food donations needed - reach out to restaurants".to_string());
        }

        let expiring = foods.expiring_soon().len();
        if expiring > 0 {
            suggestions.push(format!(
                "{} food items expiring soon - prioritize these matches",
                expiring
            ));
        }

        suggestions
    }
}
