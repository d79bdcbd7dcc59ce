// ABOUTME: Shopping list aggregation across the scaled ingredient lists of many recipes
// ABOUTME: Merges by case-insensitive name and unit and never merges across units
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Shopping List Aggregation
//!
//! Lines are keyed by `lowercase(name) + U+001F + lowercase(unit)`. The first
//! occurrence of a key fixes the displayed spelling. Output is sorted by display
//! name in natural order: letters compare case-insensitively first, digit runs
//! compare by value, and an exact case-sensitive comparison breaks ties. The unit
//! is the last tie-break so the result is deterministic.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use crate::constants::shopping::KEY_SEPARATOR;
use crate::models::{AggregatedIngredient, ShoppingListEntry};

fn merge_key(name: &str, unit: &str) -> String {
    let mut key = name.to_lowercase();
    key.push(KEY_SEPARATOR);
    key.push_str(&unit.to_lowercase());
    key
}

fn display_order(a: &AggregatedIngredient, b: &AggregatedIngredient) -> Ordering {
    natord::compare_ignore_case(&a.name, &b.name)
        .then_with(|| natord::compare(&a.name, &b.name))
        .then_with(|| natord::compare_ignore_case(&a.unit, &b.unit))
        .then_with(|| a.unit.cmp(&b.unit))
}

/// Merge the ingredient lists of `entries` into one deduplicated shopping list
///
/// Zero-quantity ingredients are kept; filter them before calling to drop them.
#[must_use]
pub fn aggregate(entries: &[ShoppingListEntry]) -> Vec<AggregatedIngredient> {
    let mut merged: HashMap<String, AggregatedIngredient> = HashMap::new();

    for entry in entries {
        for ingredient in &entry.ingredients {
            merged
                .entry(merge_key(&ingredient.name, &ingredient.unit))
                .and_modify(|line| {
                    line.quantity += ingredient.quantity;
                    line.contributing_recipe_names
                        .insert(entry.recipe_name.clone());
                })
                .or_insert_with(|| AggregatedIngredient {
                    name: ingredient.name.clone(),
                    unit: ingredient.unit.clone(),
                    quantity: ingredient.quantity,
                    contributing_recipe_names: BTreeSet::from([entry.recipe_name.clone()]),
                });
        }
    }

    let mut lines: Vec<AggregatedIngredient> = merged.into_values().collect();
    lines.sort_by(display_order);

    debug!(
        recipe_count = entries.len(),
        line_count = lines.len(),
        "Shopping list aggregated"
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ingredient;

    #[test]
    fn test_same_name_and_unit_merge_case_insensitively() {
        let lines = aggregate(&[
            ShoppingListEntry::new("Soup", vec![Ingredient::new(50.0, "g", "onion")]),
            ShoppingListEntry::new("Stew", vec![Ingredient::new(30.0, "G", "Onion")]),
        ]);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].name, "onion");
        assert_eq!(lines[0].unit, "g");
        assert!((lines[0].quantity - 80.0).abs() < f64::EPSILON);
        assert!(lines[0].has_contributor("Soup"));
        assert!(lines[0].has_contributor("Stew"));
    }

    #[test]
    fn test_different_units_are_never_merged() {
        let lines = aggregate(&[ShoppingListEntry::new(
            "Soup",
            vec![
                Ingredient::new(1.0, "cup", "rice"),
                Ingredient::new(200.0, "g", "rice"),
            ],
        )]);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].unit, "cup");
        assert_eq!(lines[1].unit, "g");
    }

    #[test]
    fn test_digit_runs_compare_by_value() {
        let lines = aggregate(&[ShoppingListEntry::new(
            "Batch",
            vec![
                Ingredient::new(1.0, "pc", "egg 10"),
                Ingredient::new(1.0, "pc", "egg 2"),
            ],
        )]);
        assert_eq!(lines[0].name, "egg 2");
        assert_eq!(lines[1].name, "egg 10");
    }
}
