use std::collections::HashMap;

use crate::models::{FoodData, FoodItem, FoodType};
use crate::safety::{calculate_safety_score, HandlingReport, StorageReport};

/// Keyed collection of food items.
///
/// Entries are kept in insertion order (map plus order vector) so that
/// downstream matching iterates deterministically.
#[derive(Debug, Default)]
pub struct FoodRegistry {
    items: HashMap<String, FoodItem>,
    order: Vec<String>,
}

/// Snapshot statistics over the registry.
#[derive(Debug, Clone)]
pub struct FoodStats {
    pub total: usize,
    pub available: usize,
    pub claimed: usize,
    pub type_counts: HashMap<FoodType, usize>,
    pub grade_counts: HashMap<String, usize>,
    pub expiring_soon: usize,
}

impl FoodRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a registry from previously persisted items, keeping their
    /// stored order.
    pub fn from_items(items: Vec<FoodItem>) -> Self {
        let mut registry = Self::new();
        for item in items {
            registry.order.push(item.id.clone());
            registry.items.insert(item.id.clone(), item);
        }
        registry
    }

    /// Create and insert a new food item. Always succeeds; the id is
    /// generated here.
    pub fn add(&mut self, data: FoodData) -> &FoodItem {
        let item = FoodItem::new(data);
        let id = item.id.clone();
        self.order.push(id.clone());
        self.items.insert(id.clone(), item);
        &self.items[&id]
    }

    pub fn get(&self, id: &str) -> Option<&FoodItem> {
        self.items.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut FoodItem> {
        self.items.get_mut(id)
    }

    /// All items in insertion order.
    pub fn all(&self) -> Vec<&FoodItem> {
        self.order.iter().filter_map(|id| self.items.get(id)).collect()
    }

    /// Unclaimed items in insertion order.
    pub fn available(&self) -> Vec<&FoodItem> {
        self.all().into_iter().filter(|item| item.is_available).collect()
    }

    pub fn by_type(&self, food_type: FoodType) -> Vec<&FoodItem> {
        self.available()
            .into_iter()
            .filter(|item| item.food_type == food_type)
            .collect()
    }

    /// Scored available items, highest composite score first.
    pub fn by_safety_score(&self) -> Vec<&FoodItem> {
        let mut scored: Vec<&FoodItem> = self
            .available()
            .into_iter()
            .filter(|item| item.safety_score.is_some())
            .collect();
        scored.sort_by(|a, b| {
            let sa = a.safety_score.as_ref().map(|s| s.score).unwrap_or(0.0);
            let sb = b.safety_score.as_ref().map(|s| s.score).unwrap_or(0.0);
            sb.partial_cmp(&sa).unwrap_or(std::cmp::Ordering::Equal)
        });
        scored
    }

    /// Available items within one hour of their maximum safe age.
    pub fn expiring_soon(&self) -> Vec<&FoodItem> {
        self.available()
            .into_iter()
            .filter(|item| item.is_expiring_soon())
            .collect()
    }

    pub fn remove(&mut self, id: &str) -> bool {
        if self.items.remove(id).is_some() {
            self.order.retain(|existing| existing != id);
            true
        } else {
            false
        }
    }

    /// Mark an item claimed. Returns false for unknown or already claimed
    /// ids.
    pub fn claim(&mut self, id: &str) -> bool {
        match self.items.get_mut(id) {
            Some(item) if item.is_available => {
                item.claim();
                true
            }
            _ => false,
        }
    }

    /// Recompute the safety score of every available item in place.
    ///
    /// Full recompute, no diffing: prior scores are overwritten. Claimed
    /// items keep whatever score they last had.
    pub fn refresh_all_safety_scores(&mut self, handling: &HandlingReport, storage: &StorageReport) {
        for item in self.items.values_mut() {
            if item.is_available {
                item.safety_score = Some(calculate_safety_score(item, handling, storage));
            }
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.order.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in insertion order, for persistence.
    pub fn to_items(&self) -> Vec<FoodItem> {
        self.order
            .iter()
            .filter_map(|id| self.items.get(id))
            .cloned()
            .collect()
    }

    pub fn stats(&self) -> FoodStats {
        let available = self.available();

        let mut type_counts: HashMap<FoodType, usize> = HashMap::new();
        let mut grade_counts: HashMap<String, usize> = HashMap::new();
        for item in &available {
            *type_counts.entry(item.food_type).or_insert(0) += 1;
            if let Some(score) = &item.safety_score {
                *grade_counts.entry(score.letter_grade.to_string()).or_insert(0) += 1;
            }
        }

        FoodStats {
            total: self.items.len(),
            available: available.len(),
            claimed: self.items.len() - available.len(),
            type_counts,
            grade_counts,
            expiring_soon: self.expiring_soon().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::safety::Grade;

    fn sample_data(name: &str, food_type: FoodType, prep: f64, temp: f64) -> FoodData {
        FoodData {
            name: name.to_string(),
            restaurant_name: "Test Kitchen".to_string(),
            food_type,
            preparation_time: prep,
            temperature: temp,
            location: "Downtown".to_string(),
            image: None,
            description: None,
        }
    }

    #[test]
    fn test_add_and_get() {
        let mut registry = FoodRegistry::new();
        let id = registry.add(sample_data("Soup", FoodType::Hot, 1.0, 150.0)).id.clone();

        assert!(registry.get(&id).is_some());
        assert!(registry.get("food_missing").is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_available_excludes_claimed() {
        let mut registry = FoodRegistry::new();
        let id = registry.add(sample_data("Soup", FoodType::Hot, 1.0, 150.0)).id.clone();
        registry.add(sample_data("Salad", FoodType::Cold, 0.5, 38.0));

        assert!(registry.claim(&id));
        assert_eq!(registry.available().len(), 1);
        assert_eq!(registry.available()[0].name, "Salad");

        // Claiming twice fails
        assert!(!registry.claim(&id));
    }

    #[test]
    fn test_insertion_order_is_stable() {
        let mut registry = FoodRegistry::new();
        for name in ["A", "B", "C"] {
            registry.add(sample_data(name, FoodType::Hot, 1.0, 150.0));
        }
        let names: Vec<&str> = registry.all().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_refresh_scores_all_available() {
        let mut registry = FoodRegistry::new();
        registry.add(sample_data("Soup", FoodType::Hot, 1.0, 150.0));
        registry.add(sample_data("Old Salad", FoodType::Cold, 6.0, 38.0));

        registry.refresh_all_safety_scores(&HandlingReport::default(), &StorageReport::default());

        for item in registry.available() {
            assert!(item.safety_score.is_some());
        }
        let soup = registry.by_safety_score()[0];
        assert_eq!(soup.name, "Soup");
        assert_eq!(soup.safety_score.as_ref().unwrap().letter_grade, Grade::A);
    }

    #[test]
    fn test_refresh_skips_claimed() {
        let mut registry = FoodRegistry::new();
        let id = registry.add(sample_data("Soup", FoodType::Hot, 1.0, 150.0)).id.clone();
        registry.claim(&id);

        registry.refresh_all_safety_scores(&HandlingReport::default(), &StorageReport::default());
        assert!(registry.get(&id).unwrap().safety_score.is_none());
    }

    #[test]
    fn test_remove() {
        let mut registry = FoodRegistry::new();
        let id = registry.add(sample_data("Soup", FoodType::Hot, 1.0, 150.0)).id.clone();

        assert!(registry.remove(&id));
        assert!(!registry.remove(&id));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_stats() {
        let mut registry = FoodRegistry::new();
        registry.add(sample_data("Soup", FoodType::Hot, 1.0, 150.0));
        registry.add(sample_data("Salad", FoodType::Cold, 3.5, 38.0));
        let id = registry.add(sample_data("Pizza", FoodType::Hot, 2.0, 145.0)).id.clone();
        registry.claim(&id);
        registry.refresh_all_safety_scores(&HandlingReport::default(), &StorageReport::default());

        let stats = registry.stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.available, 2);
        assert_eq!(stats.claimed, 1);
        assert_eq!(stats.type_counts[&FoodType::Hot], 1);
        assert_eq!(stats.expiring_soon, 1);
    }
}
