pub mod prompts;
pub mod render;

pub use prompts::{prompt_food_data, prompt_person_data, prompt_yes_no, resolve_food_name};
pub use render::{
    display_foods, display_matches, display_people, display_score_details, display_stats,
};
