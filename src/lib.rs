pub mod cli;
pub mod demo;
pub mod error;
pub mod interface;
pub mod matcher;
pub mod models;
pub mod safety;
pub mod state;

pub use error::{RescueError, Result};
pub use matcher::FoodMatcher;
pub use models::{FoodItem, MatchRecord, Person};
