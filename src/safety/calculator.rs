use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::FoodItem;
use crate::safety::constants::*;

/// Letter grade on the composite safety score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn is_failing(&self) -> bool {
        matches!(self, Grade::F)
    }

    /// Map a composite score to its letter grade.
    pub fn from_score(score: f64) -> Grade {
        if score >= GRADE_A_MIN {
            Grade::A
        } else if score >= GRADE_B_MIN {
            Grade::B
        } else if score >= GRADE_C_MIN {
            Grade::C
        } else if score >= GRADE_D_MIN {
            Grade::D
        } else {
            Grade::F
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        f.write_str(s)
    }
}

/// Per-factor sub-scores, each in [0, 100].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorScores {
    pub temperature: f64,
    pub time: f64,
    pub handling: f64,
    pub storage: f64,
}

/// Result of one safety evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyScore {
    pub letter_grade: Grade,
    /// Weighted composite, rounded to 2 decimals.
    pub score: f64,
    pub factors: FactorScores,
    /// Human-readable concerns for any factor below the concern threshold.
    pub details: Vec<String>,
}

/// Handling compliance flags. Defaults describe the ideal case, so scoring
/// with `HandlingReport::default()` yields the optimistic upper bound.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandlingReport {
    pub staff_trained: bool,
    pub protocols_followed: bool,
    pub gloves_used: bool,
    pub clean_surfaces: bool,
}

impl Default for HandlingReport {
    fn default() -> Self {
        Self {
            staff_trained: true,
            protocols_followed: true,
            gloves_used: true,
            clean_surfaces: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContaminationRisk {
    Low,
    Medium,
    High,
}

impl ContaminationRisk {
    fn points(&self) -> f64 {
        match self {
            ContaminationRisk::Low => 30.0,
            ContaminationRisk::Medium => 20.0,
            ContaminationRisk::High => 0.0,
        }
    }
}

/// Storage conditions. Defaults are ideal, matching `HandlingReport`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageReport {
    /// Relative humidity percentage.
    pub humidity: f64,
    pub contamination_risk: ContaminationRisk,
    pub proper_containers: bool,
    pub clean_environment: bool,
}

impl Default for StorageReport {
    fn default() -> Self {
        Self {
            humidity: 50.0,
            contamination_risk: ContaminationRisk::Low,
            proper_containers: true,
            clean_environment: true,
        }
    }
}

/// Temperature sub-score: 100 inside the type's safe band, otherwise a
/// linear penalty of 2 points per °F of deviation, capped at 50.
pub fn temperature_score(food: &FoodItem) -> f64 {
    let band = temp_band(food.food_type);
    let deviation = if food.temperature < band.min {
        band.min - food.temperature
    } else if food.temperature > band.max {
        food.temperature - band.max
    } else {
        return 100.0;
    };

    let penalty = (deviation * TEMP_PENALTY_PER_DEGREE).min(TEMP_PENALTY_CAP);
    (100.0 - penalty).max(0.0)
}

/// Time sub-score: linear decay from 100 (fresh) to 0 at the type's maximum
/// safe age.
pub fn time_score(food: &FoodItem) -> f64 {
    let max_hours = max_safe_hours(food.food_type);

    if food.preparation_time <= 0.0 {
        return 100.0;
    }
    if food.preparation_time >= max_hours {
        return 0.0;
    }

    (100.0 - (food.preparation_time / max_hours) * 100.0).max(0.0)
}

/// Handling sub-score: 25 points per satisfied flag.
pub fn handling_score(handling: &HandlingReport) -> f64 {
    [
        handling.staff_trained,
        handling.protocols_followed,
        handling.gloves_used,
        handling.clean_surfaces,
    ]
    .into_iter()
    .filter(|&flag| flag)
    .count() as f64
        * HANDLING_POINTS_PER_FLAG
}

/// Storage sub-score: humidity banding + contamination risk + containers +
/// environment, maxing out at 100.
pub fn storage_score(storage: &StorageReport) -> f64 {
    let mut score = if (40.0..=60.0).contains(&storage.humidity) {
        30.0
    } else if (30.0..=70.0).contains(&storage.humidity) {
        20.0
    } else {
        10.0
    };

    score += storage.contamination_risk.points();

    if storage.proper_containers {
        score += 20.0;
    }
    if storage.clean_environment {
        score += 20.0;
    }

    score
}

fn score_details(food: &FoodItem, factors: &FactorScores) -> Vec<String> {
    let mut details = Vec::new();

    if factors.temperature < FACTOR_CONCERN_THRESHOLD {
        details.push(format!("Temperature concern: {}°F", food.temperature));
    }
    if factors.time < FACTOR_CONCERN_THRESHOLD {
        details.push(format!("Time concern: {} hours old", food.preparation_time));
    }
    if factors.handling < FACTOR_CONCERN_THRESHOLD {
        details.push("Handling compliance issues detected".to_string());
    }
    if factors.storage < FACTOR_CONCERN_THRESHOLD {
        details.push("Storage conditions suboptimal".to_string());
    }

    if details.is_empty() {
        details.push("All safety factors within acceptable ranges".to_string());
    }

    details
}

/// Compute the weighted safety score for a food item.
///
/// Pure and deterministic: identical inputs always produce identical
/// results. Weights: temperature 0.4, time 0.3, handling 0.2, storage 0.1.
pub fn calculate_safety_score(
    food: &FoodItem,
    handling: &HandlingReport,
    storage: &StorageReport,
) -> SafetyScore {
    let factors = FactorScores {
        temperature: temperature_score(food),
        time: time_score(food),
        handling: handling_score(handling),
        storage: storage_score(storage),
    };

    let total = factors.temperature * TEMPERATURE_WEIGHT
        + factors.time * TIME_WEIGHT
        + factors.handling * HANDLING_WEIGHT
        + factors.storage * STORAGE_WEIGHT;

    let score = (total * 100.0).round() / 100.0;
    let details = score_details(food, &factors);

    SafetyScore {
        letter_grade: Grade::from_score(score),
        score,
        factors,
        details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FoodData, FoodType};

    fn make_food(food_type: FoodType, temperature: f64, preparation_time: f64) -> FoodItem {
        FoodItem::new(FoodData {
            name: "Test Dish".to_string(),
            restaurant_name: "Test Kitchen".to_string(),
            food_type,
            preparation_time,
            temperature,
            location: "Downtown".to_string(),
            image: None,
            description: None,
        })
    }

    fn ideal_score(food: &FoodItem) -> SafetyScore {
        calculate_safety_score(food, &HandlingReport::default(), &StorageReport::default())
    }

    #[test]
    fn test_temperature_in_band_is_perfect() {
        assert_eq!(temperature_score(&make_food(FoodType::Hot, 150.0, 1.0)), 100.0);
        assert_eq!(temperature_score(&make_food(FoodType::Cold, 35.0, 1.0)), 100.0);
        assert_eq!(temperature_score(&make_food(FoodType::Frozen, 0.0, 1.0)), 100.0);
    }

    #[test]
    fn test_temperature_penalty_linear_and_capped() {
        // 10°F below the hot band: 100 - 20 = 80
        assert_eq!(temperature_score(&make_food(FoodType::Hot, 130.0, 1.0)), 80.0);
        // 100°F below: penalty capped at 50
        assert_eq!(temperature_score(&make_food(FoodType::Hot, 40.0, 1.0)), 50.0);
        // Above the band penalizes too
        assert_eq!(temperature_score(&make_food(FoodType::Cold, 45.0, 1.0)), 90.0);
    }

    #[test]
    fn test_time_score_boundaries() {
        assert_eq!(time_score(&make_food(FoodType::Hot, 150.0, 0.0)), 100.0);
        assert_eq!(time_score(&make_food(FoodType::Hot, 150.0, -1.0)), 100.0);
        assert_eq!(time_score(&make_food(FoodType::Hot, 150.0, 4.0)), 0.0);
        assert_eq!(time_score(&make_food(FoodType::Hot, 150.0, 2.0)), 50.0);
        // Frozen decays against the 24h limit
        assert_eq!(time_score(&make_food(FoodType::Frozen, 0.0, 12.0)), 50.0);
    }

    #[test]
    fn test_handling_score_per_flag() {
        assert_eq!(handling_score(&HandlingReport::default()), 100.0);

        let partial = HandlingReport {
            gloves_used: false,
            clean_surfaces: false,
            ..Default::default()
        };
        assert_eq!(handling_score(&partial), 50.0);
    }

    #[test]
    fn test_storage_score_bands() {
        assert_eq!(storage_score(&StorageReport::default()), 100.0);

        let humid = StorageReport {
            humidity: 65.0,
            ..Default::default()
        };
        assert_eq!(storage_score(&humid), 90.0);

        let bad = StorageReport {
            humidity: 90.0,
            contamination_risk: ContaminationRisk::High,
            proper_containers: false,
            clean_environment: false,
        };
        assert_eq!(storage_score(&bad), 10.0);
    }

    #[test]
    fn test_perfect_hot_food_grades_a() {
        let result = ideal_score(&make_food(FoodType::Hot, 150.0, 1.0));
        assert_eq!(result.letter_grade, Grade::A);
        assert!(result.score > 90.0);
        assert_eq!(
            result.details,
            vec!["All safety factors within acceptable ranges".to_string()]
        );
    }

    #[test]
    fn test_expired_cold_food_loses_entire_time_factor() {
        // Past the 4h limit the time factor is 0, leaving at most 70 of the
        // composite even with ideal handling and storage.
        let result = ideal_score(&make_food(FoodType::Cold, 35.0, 6.0));
        assert_eq!(result.factors.time, 0.0);
        assert_eq!(result.score, 70.0);
        assert_eq!(result.letter_grade, Grade::C);
        assert!(result.details.iter().any(|d| d.contains("Time concern")));
    }

    #[test]
    fn test_score_within_bounds() {
        let worst = calculate_safety_score(
            &make_food(FoodType::Hot, 0.0, 10.0),
            &HandlingReport {
                staff_trained: false,
                protocols_followed: false,
                gloves_used: false,
                clean_surfaces: false,
            },
            &StorageReport {
                humidity: 95.0,
                contamination_risk: ContaminationRisk::High,
                proper_containers: false,
                clean_environment: false,
            },
        );
        assert!(worst.score >= 0.0 && worst.score <= 100.0);
        assert_eq!(worst.letter_grade, Grade::F);

        let best = ideal_score(&make_food(FoodType::Cold, 36.0, 0.0));
        assert_eq!(best.score, 100.0);
    }

    #[test]
    fn test_grade_thresholds_exact() {
        assert_eq!(Grade::from_score(90.0), Grade::A);
        assert_eq!(Grade::from_score(89.99), Grade::B);
        assert_eq!(Grade::from_score(80.0), Grade::B);
        assert_eq!(Grade::from_score(70.0), Grade::C);
        assert_eq!(Grade::from_score(60.0), Grade::D);
        assert_eq!(Grade::from_score(59.99), Grade::F);
    }

    #[test]
    fn test_idempotent_scoring() {
        let food = make_food(FoodType::Frozen, 20.0, 6.0);
        let first = ideal_score(&food);
        let second = ideal_score(&food);
        assert_eq!(first, second);
    }
}
