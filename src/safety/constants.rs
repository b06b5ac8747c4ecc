use crate::models::FoodType;

/// Safe holding temperature band in °F, inclusive on both ends.
#[derive(Debug, Clone, Copy)]
pub struct TempBand {
    pub min: f64,
    pub max: f64,
}

/// Safe temperature band per food type.
pub fn temp_band(food_type: FoodType) -> TempBand {
    match food_type {
        FoodType::Hot => TempBand { min: 140.0, max: 165.0 },
        FoodType::Cold => TempBand { min: 32.0, max: 40.0 },
        FoodType::Frozen => TempBand { min: -10.0, max: 32.0 },
    }
}

/// Maximum safe age in hours per food type.
///
/// Shared by the time sub-score and `FoodItem::time_until_expiration`; the
/// two must stay numerically identical.
pub fn max_safe_hours(food_type: FoodType) -> f64 {
    match food_type {
        FoodType::Hot => 4.0,
        FoodType::Cold => 4.0,
        FoodType::Frozen => 24.0,
    }
}

/// Factor weights for the composite score.
pub const TEMPERATURE_WEIGHT: f64 = 0.4;
pub const TIME_WEIGHT: f64 = 0.3;
pub const HANDLING_WEIGHT: f64 = 0.2;
pub const STORAGE_WEIGHT: f64 = 0.1;

/// Out-of-band temperature penalty: points lost per °F of deviation.
pub const TEMP_PENALTY_PER_DEGREE: f64 = 2.0;

/// Cap on the temperature penalty (worst in-rule score is 50).
pub const TEMP_PENALTY_CAP: f64 = 50.0;

/// Points per satisfied handling flag (four flags).
pub const HANDLING_POINTS_PER_FLAG: f64 = 25.0;

/// A sub-factor below this threshold is called out in the score details.
pub const FACTOR_CONCERN_THRESHOLD: f64 = 70.0;

/// Items with at most this many safe hours left count as expiring soon.
pub const EXPIRING_SOON_HOURS: f64 = 1.0;

/// Letter-grade cutoffs on the composite score.
pub const GRADE_A_MIN: f64 = 90.0;
pub const GRADE_B_MIN: f64 = 80.0;
pub const GRADE_C_MIN: f64 = 70.0;
pub const GRADE_D_MIN: f64 = 60.0;
