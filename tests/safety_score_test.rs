use assert_float_eq::assert_float_absolute_eq;

use food_rescue_rs::models::{FoodData, FoodItem, FoodType};
use food_rescue_rs::safety::{
    calculate_safety_score, ContaminationRisk, Grade, HandlingReport, StorageReport,
};

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

fn ideal(food: &FoodItem) -> food_rescue_rs::safety::SafetyScore {
    calculate_safety_score(food, &HandlingReport::default(), &StorageReport::default())
}

#[test]
fn test_score_stays_in_bounds_across_inputs() {
    let temperatures = [-40.0, 0.0, 35.0, 70.0, 120.0, 150.0, 212.0];
    let ages = [-1.0, 0.0, 0.5, 2.0, 4.0, 10.0, 30.0];

    for food_type in FoodType::ALL {
        for &temperature in &temperatures {
            for &age in &ages {
                let result = ideal(&make_food(food_type, temperature, age));
                assert!(
                    (0.0..=100.0).contains(&result.score),
                    "score {} out of bounds for {:?}/{}/{}",
                    result.score,
                    food_type,
                    temperature,
                    age
                );
                assert_eq!(result.letter_grade, Grade::from_score(result.score));
            }
        }
    }
}

#[test]
fn test_perfect_hot_food_is_grade_a() {
    let result = ideal(&make_food(FoodType::Hot, 150.0, 1.0));
    assert_eq!(result.letter_grade, Grade::A);
    assert!(result.score > 90.0);
    assert_float_absolute_eq!(result.score, 92.5, 1e-9);
}

#[test]
fn test_expired_cold_food_loses_time_factor() {
    // Past the 4h maximum the time factor is zero; the other factors still
    // contribute 70 points with ideal defaults.
    let result = ideal(&make_food(FoodType::Cold, 35.0, 6.0));
    assert_float_absolute_eq!(result.factors.time, 0.0, 1e-9);
    assert_float_absolute_eq!(result.score, 70.0, 1e-9);
    assert_eq!(result.letter_grade, Grade::C);
}

#[test]
fn test_cooling_hot_food_degrades() {
    let fresh = ideal(&make_food(FoodType::Hot, 150.0, 1.0));
    let cooling = ideal(&make_food(FoodType::Hot, 100.0, 1.0));
    assert!(cooling.score < fresh.score);
    assert!(cooling.score < 80.0);
}

#[test]
fn test_scoring_is_idempotent() {
    let food = make_food(FoodType::Frozen, 25.0, 5.5);
    let handling = HandlingReport {
        gloves_used: false,
        ..Default::default()
    };
    let storage = StorageReport {
        humidity: 72.0,
        contamination_risk: ContaminationRisk::Medium,
        ..Default::default()
    };

    let first = calculate_safety_score(&food, &handling, &storage);
    let second = calculate_safety_score(&food, &handling, &storage);
    assert_eq!(first, second);
}

#[test]
fn test_weights_sum_as_documented() {
    // A fully perfect item reaches exactly 100.
    let result = ideal(&make_food(FoodType::Cold, 36.0, 0.0));
    assert_float_absolute_eq!(result.score, 100.0, 1e-9);

    // Degrading one factor moves the composite by its weight only:
    // handling dropping from 100 to 50 costs 0.2 * 50 = 10 points.
    let partial_handling = HandlingReport {
        gloves_used: false,
        clean_surfaces: false,
        ..Default::default()
    };
    let degraded = calculate_safety_score(
        &make_food(FoodType::Cold, 36.0, 0.0),
        &partial_handling,
        &StorageReport::default(),
    );
    assert_float_absolute_eq!(degraded.score, 90.0, 1e-9);
}

#[test]
fn test_concern_details_reported_below_threshold() {
    let result = ideal(&make_food(FoodType::Hot, 60.0, 3.5));
    assert!(result.details.iter().any(|d| d.contains("Temperature concern")));
    assert!(result.details.iter().any(|d| d.contains("Time concern")));

    let clean = ideal(&make_food(FoodType::Hot, 150.0, 0.5));
    assert_eq!(clean.details.len(), 1);
    assert!(clean.details[0].contains("within acceptable ranges"));
}
