use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{match_id, FoodItem, MatchRecord, Person};
use crate::state::{FoodRegistry, PersonRegistry};

/// Safety-score gap above which score ordering overrides urgency ordering.
const SAFETY_SORT_BAND: f64 = 10.0;

/// Minimum weighted pair score required to commit a match.
pub const MATCH_COMMIT_THRESHOLD: f64 = 0.3;

/// The reported match score divides the weighted sum by the number of
/// factors considered. Kept from the original system even though two of the
/// factors are hard filters, which caps reported scores at 0.25; the commit
/// threshold therefore applies to the sum before this division.
const MATCH_FACTOR_COUNT: f64 = 4.0;

const TYPE_WEIGHT: f64 = 0.4;
const SAFETY_WEIGHT: f64 = 0.3;
const DIETARY_WEIGHT: f64 = 0.2;
const URGENCY_WEIGHT: f64 = 0.1;

/// Hours of remaining safe time over which urgency decays to zero.
const URGENCY_WINDOW_HOURS: f64 = 4.0;

/// Phase of the most recent matching run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatcherState {
    #[default]
    Idle,
    Matching,
    Complete,
}

/// Entry of the matcher's query surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub food_id: String,
    pub person_id: String,
    pub match_id: String,
}

/// Greedy one-to-one matcher of food items to people.
///
/// The dual maps are the 1:1 invariant: a food id keys at most one entry in
/// `matches`, a person id at most one in `reverse_matches`, and the two
/// always mirror each other.
#[derive(Debug, Default)]
pub struct FoodMatcher {
    matches: HashMap<String, String>,
    reverse_matches: HashMap<String, String>,
    /// Food ids in commit order, for deterministic queries.
    order: Vec<String>,
    state: MatcherState,
}

/// Weighted pair score before normalization. Type mismatch and dietary
/// conflict are hard filters, not partial penalties.
fn weighted_match_score(food: &FoodItem, person: &Person) -> f64 {
    if !person.can_accept(food.food_type) {
        return 0.0;
    }

    let mut score = TYPE_WEIGHT;

    if let Some(safety) = &food.safety_score {
        score += (safety.score / 100.0) * SAFETY_WEIGHT;
    }

    if person.has_dietary_conflict(food) {
        return 0.0;
    }
    score += DIETARY_WEIGHT;

    let urgency = (1.0 - food.time_until_expiration() / URGENCY_WINDOW_HOURS).max(0.0);
    score += urgency * URGENCY_WEIGHT;

    score
}

/// Normalized pair score as reported on match records (0 on either hard
/// filter, at most 0.25 otherwise).
pub fn match_score(food: &FoodItem, person: &Person) -> f64 {
    weighted_match_score(food, person) / MATCH_FACTOR_COUNT
}

/// Priority order for processing food: a score gap above the band decides
/// outright (higher first); inside the band the more urgent item (less time
/// remaining) goes first.
fn priority_order(a: &FoodItem, b: &FoodItem) -> Ordering {
    let score_a = a.safety_score.as_ref().map(|s| s.score).unwrap_or(0.0);
    let score_b = b.safety_score.as_ref().map(|s| s.score).unwrap_or(0.0);

    if (score_a - score_b).abs() > SAFETY_SORT_BAND {
        score_b.partial_cmp(&score_a).unwrap_or(Ordering::Equal)
    } else {
        a.time_until_expiration()
            .partial_cmp(&b.time_until_expiration())
            .unwrap_or(Ordering::Equal)
    }
}

/// Stable insertion sort. The band comparator is intentionally not a total
/// order, which `sort_by` is allowed to reject, so the pass is done by hand.
fn insertion_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && compare(&items[j - 1], &items[j]) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

impl FoodMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MatcherState {
        self.state
    }

    /// Run one full matching pass.
    ///
    /// Prior match state is discarded unconditionally; there is no
    /// incremental re-matching. Each food item is decided exactly once and
    /// a consumed person is never reconsidered within the run. Matched
    /// people get `matched_food_id` set; food availability is left to the
    /// caller's claim step.
    pub fn find_matches(
        &mut self,
        foods: &FoodRegistry,
        people: &mut PersonRegistry,
    ) -> Vec<MatchRecord> {
        self.clear_matches();
        self.state = MatcherState::Matching;

        // Snapshot: scored, non-failing, available food only.
        let mut candidates: Vec<FoodItem> = foods
            .available()
            .into_iter()
            .filter(|item| item.is_safe())
            .cloned()
            .collect();
        insertion_sort_by(&mut candidates, priority_order);

        // Working list, consumed as people are matched.
        let mut unmatched_people: Vec<Person> = people.active().into_iter().cloned().collect();

        let mut records = Vec::new();

        for food in &candidates {
            // First-max scan: strict greater-than keeps the earliest best.
            let mut best_index = None;
            let mut best_weighted = -1.0;
            for (index, person) in unmatched_people.iter().enumerate() {
                let weighted = weighted_match_score(food, person);
                if weighted > best_weighted {
                    best_weighted = weighted;
                    best_index = Some(index);
                }
            }

            if best_weighted <= MATCH_COMMIT_THRESHOLD {
                continue;
            }
            let Some(index) = best_index else {
                continue;
            };

            let person = unmatched_people.remove(index);
            let record = MatchRecord::new(food, &person, best_weighted / MATCH_FACTOR_COUNT);

            self.matches.insert(food.id.clone(), person.id.clone());
            self.reverse_matches.insert(person.id.clone(), food.id.clone());
            self.order.push(food.id.clone());

            if let Some(live) = people.get_mut(&person.id) {
                live.match_with_food(&food.id);
            }

            records.push(record);
        }

        self.state = MatcherState::Complete;
        records
    }

    /// Current pairings in commit order.
    pub fn matches(&self) -> Vec<MatchSummary> {
        self.order
            .iter()
            .filter_map(|food_id| {
                self.matches.get(food_id).map(|person_id| MatchSummary {
                    food_id: food_id.clone(),
                    person_id: person_id.clone(),
                    match_id: match_id(food_id, person_id),
                })
            })
            .collect()
    }

    pub fn match_for_food(&self, food_id: &str) -> Option<&str> {
        self.matches.get(food_id).map(String::as_str)
    }

    pub fn match_for_person(&self, person_id: &str) -> Option<&str> {
        self.reverse_matches.get(person_id).map(String::as_str)
    }

    /// Remove one pairing. Succeeds only when both maps agree on it.
    pub fn remove_match(&mut self, food_id: &str, person_id: &str) -> bool {
        let food_side = self.matches.get(food_id).map(String::as_str);
        let person_side = self.reverse_matches.get(person_id).map(String::as_str);

        if food_side == Some(person_id) && person_side == Some(food_id) {
            self.matches.remove(food_id);
            self.reverse_matches.remove(person_id);
            self.order.retain(|id| id != food_id);
            true
        } else {
            false
        }
    }

    pub fn clear_matches(&mut self) {
        self.matches.clear();
        self.reverse_matches.clear();
        self.order.clear();
        self.state = MatcherState::Idle;
    }

    pub fn matched_food_count(&self) -> usize {
        self.matches.len()
    }

    pub fn matched_person_count(&self) -> usize {
        self.reverse_matches.len()
    }
}
