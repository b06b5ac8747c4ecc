use std::collections::HashMap;

use crate::models::{FoodPreference, FoodType, Person, PersonData};

/// Keyed collection of recipients, insertion-ordered like `FoodRegistry`.
#[derive(Debug, Default)]
pub struct PersonRegistry {
    people: HashMap<String, Person>,
    order: Vec<String>,
}

/// Snapshot statistics over the registry.
#[derive(Debug, Clone)]
pub struct PersonStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub matched: usize,
    pub unmatched: usize,
    pub preference_counts: HashMap<FoodPreference, usize>,
    pub restriction_counts: HashMap<String, usize>,
}

impl PersonRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_people(people: Vec<Person>) -> Self {
        let mut registry = Self::new();
        for person in people {
            registry.order.push(person.id.clone());
            registry.people.insert(person.id.clone(), person);
        }
        registry
    }

    pub fn add(&mut self, data: PersonData) -> &Person {
        let person = Person::new(data);
        let id = person.id.clone();
        self.order.push(id.clone());
        self.people.insert(id.clone(), person);
        &self.people[&id]
    }

    pub fn get(&self, id: &str) -> Option<&Person> {
        self.people.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Person> {
        self.people.get_mut(id)
    }

    pub fn all(&self) -> Vec<&Person> {
        self.order.iter().filter_map(|id| self.people.get(id)).collect()
    }

    /// Active people in insertion order.
    pub fn active(&self) -> Vec<&Person> {
        self.all().into_iter().filter(|p| p.is_active).collect()
    }

    /// Active people not currently matched to any food.
    pub fn unmatched(&self) -> Vec<&Person> {
        self.active()
            .into_iter()
            .filter(|p| p.matched_food_id.is_none())
            .collect()
    }

    /// Active people willing to take the given food type.
    pub fn by_food_type(&self, food_type: FoodType) -> Vec<&Person> {
        self.active()
            .into_iter()
            .filter(|p| p.can_accept(food_type))
            .collect()
    }

    pub fn remove(&mut self, id: &str) -> bool {
        if self.people.remove(id).is_some() {
            self.order.retain(|existing| existing != id);
            true
        } else {
            false
        }
    }

    /// Clear every person's matched-food reference.
    pub fn clear_all_matches(&mut self) {
        for person in self.people.values_mut() {
            person.clear_match();
        }
    }

    pub fn clear(&mut self) {
        self.people.clear();
        self.order.clear();
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn to_people(&self) -> Vec<Person> {
        self.order
            .iter()
            .filter_map(|id| self.people.get(id))
            .cloned()
            .collect()
    }

    pub fn stats(&self) -> PersonStats {
        let active = self.active();
        let unmatched = self.unmatched();

        let mut preference_counts: HashMap<FoodPreference, usize> = HashMap::new();
        let mut restriction_counts: HashMap<String, usize> = HashMap::new();
        for person in &active {
            *preference_counts.entry(person.preference).or_insert(0) += 1;
            for restriction in &person.dietary_restrictions {
                *restriction_counts.entry(restriction.clone()).or_insert(0) += 1;
            }
        }

        PersonStats {
            total: self.people.len(),
            active: active.len(),
            inactive: self.people.len() - active.len(),
            matched: active.len() - unmatched.len(),
            unmatched: unmatched.len(),
            preference_counts,
            restriction_counts,
        }
    }
}
