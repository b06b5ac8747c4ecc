mod food_registry;
mod person_registry;
mod persistence;

pub use food_registry::{FoodRegistry, FoodStats};
pub use persistence::{import_foods_csv, import_people_csv, load_state, save_state, AppState};
pub use person_registry::{PersonRegistry, PersonStats};
