// ABOUTME: Shopping list view types produced by ingredient aggregation
// ABOUTME: ShoppingListEntry is the per-recipe input, AggregatedIngredient the merged output line
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::recipe::Ingredient;

/// Scaled ingredient list of one planned recipe, ready for aggregation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListEntry {
    /// Display name of the contributing recipe
    pub recipe_name: String,
    /// Ingredients already scaled to the planned quantity
    pub ingredients: Vec<Ingredient>,
}

impl ShoppingListEntry {
    /// Create an entry for `recipe_name`
    #[must_use]
    pub fn new(recipe_name: impl Into<String>, ingredients: Vec<Ingredient>) -> Self {
        Self {
            recipe_name: recipe_name.into(),
            ingredients,
        }
    }
}

/// One merged shopping list line
///
/// Name and unit keep the spelling of the first occurrence seen. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedIngredient {
    /// Display name
    pub name: String,
    /// Unit shared by every merged occurrence
    pub unit: String,
    /// Summed quantity in `unit`
    pub quantity: f64,
    /// Recipes that contributed to this line
    pub contributing_recipe_names: BTreeSet<String>,
}

impl AggregatedIngredient {
    /// Whether `recipe_name` contributed to this line
    #[must_use]
    pub fn has_contributor(&self, recipe_name: &str) -> bool {
        self.contributing_recipe_names.contains(recipe_name)
    }
}
