use crate::matcher::MatchStats;
use crate::models::{FoodItem, MatchRecord, Person};

/// Display available food items with their safety grades.
pub fn display_foods(foods: &[&FoodItem], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    let max_name_len = foods.iter().map(|f| f.name.len()).max().unwrap_or(10);

    for food in foods {
        let grade = food
            .safety_score
            .as_ref()
            .map(|s| format!("{} ({:.2})", s.letter_grade, s.score))
            .unwrap_or_else(|| "unscored".to_string());

        println!(
            "  {:<width$} [{}] {:>5.1}°F, {:.1}h old, {:.1}h left | {} | {}",
            food.name,
            food.food_type,
            food.temperature,
            food.preparation_time,
            food.time_until_expiration(),
            grade,
            food.restaurant_name,
            width = max_name_len
        );
    }

    println!();
}

/// Display the concern breakdown of scored items.
pub fn display_score_details(foods: &[&FoodItem]) {
    for food in foods {
        if let Some(score) = &food.safety_score {
            println!("{} — {} ({:.2})", food.name, score.letter_grade, score.score);
            println!(
                "    temperature {:.1}, time {:.1}, handling {:.1}, storage {:.1}",
                score.factors.temperature,
                score.factors.time,
                score.factors.handling,
                score.factors.storage
            );
            for detail in &score.details {
                println!("    - {}", detail);
            }
        }
    }
    println!();
}

/// Display registered people.
pub fn display_people(people: &[&Person], title: &str) {
    if people.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} people) ===", title, people.len());
    println!();

    for person in people {
        let status = if !person.is_active {
            "inactive"
        } else if person.matched_food_id.is_some() {
            "matched"
        } else {
            "waiting"
        };

        let restrictions = if person.dietary_restrictions.is_empty() {
            String::new()
        } else {
            format!(" | avoids: {}", person.dietary_restrictions.join(", "))
        };

        println!(
            "  {} ({}) prefers {} food, {:.0} mi radius [{}]{}",
            person.name, person.location, person.preference, person.max_distance, status, restrictions
        );
    }

    println!();
}

/// Display the matches produced by a run.
pub fn display_matches(records: &[MatchRecord]) {
    if records.is_empty() {
        println!("No matches found.");
        return;
    }

    println!();
    println!("=== Matches ===");
    println!();

    for (i, record) in records.iter().enumerate() {
        let grade = record
            .food
            .safety_score
            .as_ref()
            .map(|s| s.letter_grade.to_string())
            .unwrap_or_else(|| "?".to_string());

        println!(
            "{:>3}. {} ({}, grade {}) -> {} ({}) | score {:.3}",
            i + 1,
            record.food.name,
            record.food.restaurant_name,
            grade,
            record.person.name,
            record.person.location,
            record.match_score
        );
    }

    println!();
}

/// Display run statistics and any improvement suggestions.
pub fn display_stats(stats: &MatchStats, suggestions: &[String]) {
    println!("--- Summary ---");
    println!("Available food: {}", stats.total_food);
    println!("Active people: {}", stats.total_people);
    println!("Matched: {} food / {} people", stats.matched_food, stats.matched_people);
    println!(
        "Unmatched: {} food / {} people",
        stats.unmatched_food, stats.unmatched_people
    );
    println!("Match rate: {:.1}%", stats.match_rate);

    if !suggestions.is_empty() {
        println!();
        println!("Suggestions:");
        for suggestion in suggestions {
            println!("  - {}", suggestion);
        }
    }
    println!();
}
