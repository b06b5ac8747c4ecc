mod engine;
mod stats;

pub use engine::{match_score, FoodMatcher, MatchSummary, MatcherState, MATCH_COMMIT_THRESHOLD};
pub use stats::MatchStats;
