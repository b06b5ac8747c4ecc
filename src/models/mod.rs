mod food;
mod match_record;
mod person;

pub use food::{FoodData, FoodItem, FoodType};
pub use match_record::{MatchRecord, MatchStatus};
pub(crate) use match_record::match_id;
pub use person::{FoodPreference, Person, PersonData};

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Generate an entity id of the form `<prefix>_<millis>_<random>`.
pub(crate) fn generate_id(prefix: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(char::from)
        .collect();
    format!("{}_{}_{}", prefix, millis, suffix.to_lowercase())
}
