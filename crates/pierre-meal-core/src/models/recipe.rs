// ABOUTME: Recipe data model with meal-time categories, per-100g nutrition, and ingredients
// ABOUTME: Defines RecipeId, MealSlot, NutritionPer100g, Ingredient, and Recipe validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::errors::PlanningError;

/// Externally assigned recipe identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(pub u64);

impl RecipeId {
    /// Raw numeric value
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for RecipeId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl Display for RecipeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Meal time within a day
///
/// Declaration order is the canonical display order of a day.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Small meal between lunch and dinner
    Snack,
    /// Evening meal
    Dinner,
}

impl MealSlot {
    /// All slots in display order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Snack, Self::Dinner];

    /// Lowercase wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Snack => "snack",
            Self::Dinner => "dinner",
        }
    }

    /// Position of this slot within a day (0-based)
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Breakfast => 0,
            Self::Lunch => 1,
            Self::Snack => 2,
            Self::Dinner => 3,
        }
    }
}

impl Display for MealSlot {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "snack" | "snacks" => Ok(Self::Snack),
            "dinner" => Ok(Self::Dinner),
            other => Err(format!("unknown meal slot '{other}'")),
        }
    }
}

/// Nutrition facts per 100 grams of a prepared recipe
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionPer100g {
    /// Energy in kcal
    pub calories: f64,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbohydrates: f64,
    /// Fat in grams
    pub fat: f64,
    /// Fiber in grams
    #[serde(default)]
    pub fiber: f64,
}

impl NutritionPer100g {
    /// Create nutrition facts from the five tracked values
    #[must_use]
    pub const fn new(calories: f64, protein: f64, carbohydrates: f64, fat: f64, fiber: f64) -> Self {
        Self {
            calories,
            protein,
            carbohydrates,
            fat,
            fiber,
        }
    }

    fn fields(&self) -> [(&'static str, f64); 5] {
        [
            ("calories", self.calories),
            ("protein", self.protein),
            ("carbohydrates", self.carbohydrates),
            ("fat", self.fat),
            ("fiber", self.fiber),
        ]
    }
}

/// Single ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Amount in `unit`
    pub quantity: f64,
    /// Free-form unit (g, ml, cup, pc, ...)
    pub unit: String,
    /// Human-readable ingredient name
    pub name: String,
}

impl Ingredient {
    /// Create a new ingredient line
    #[must_use]
    pub fn new(quantity: f64, unit: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            quantity,
            unit: unit.into(),
            name: name.into(),
        }
    }
}

/// A complete recipe as held by the recipe catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique recipe identifier
    pub id: RecipeId,
    /// Display name
    pub name: String,
    /// Meal times this recipe is suitable for
    #[serde(alias = "category")]
    pub categories: BTreeSet<MealSlot>,
    /// Reference portion in grams the ingredient list is written for
    pub portion_grams: f64,
    /// Nutrition per 100g of the prepared dish
    pub nutrition_per_100g: NutritionPer100g,
    /// Ingredient lines for one reference portion
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Ordered preparation steps
    #[serde(default)]
    pub instructions: Vec<String>,
}

impl Recipe {
    /// Create a recipe with no categories, nutrition, or ingredients yet
    #[must_use]
    pub fn new(id: impl Into<RecipeId>, name: impl Into<String>, portion_grams: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            categories: BTreeSet::new(),
            portion_grams,
            nutrition_per_100g: NutritionPer100g::default(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
        }
    }

    /// Add a meal-time category
    #[must_use]
    pub fn with_category(mut self, slot: MealSlot) -> Self {
        self.categories.insert(slot);
        self
    }

    /// Set nutrition per 100g
    #[must_use]
    pub const fn with_nutrition(mut self, nutrition: NutritionPer100g) -> Self {
        self.nutrition_per_100g = nutrition;
        self
    }

    /// Add an ingredient line
    #[must_use]
    pub fn with_ingredient(mut self, ingredient: Ingredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    /// Add an instruction step
    #[must_use]
    pub fn with_instruction(mut self, step: impl Into<String>) -> Self {
        self.instructions.push(step.into());
        self
    }

    /// Whether `slot` is one of this recipe's categories
    #[must_use]
    pub fn has_category(&self, slot: MealSlot) -> bool {
        self.categories.contains(&slot)
    }

    /// Check every structural invariant of a catalog recipe
    ///
    /// # Errors
    ///
    /// Returns `PlanningError::InvalidRecipe` naming the first violated invariant
    pub fn validate(&self) -> Result<(), PlanningError> {
        if self.name.trim().is_empty() {
            return Err(PlanningError::invalid_recipe(self.id, "name is empty"));
        }
        if self.categories.is_empty() {
            return Err(PlanningError::invalid_recipe(
                self.id,
                "at least one meal-time category is required",
            ));
        }
        if !self.portion_grams.is_finite() || self.portion_grams <= 0.0 {
            return Err(PlanningError::invalid_recipe(
                self.id,
                format!("portion must be > 0 grams, got {}", self.portion_grams),
            ));
        }
        for (field, value) in self.nutrition_per_100g.fields() {
            if !value.is_finite() || value < 0.0 {
                return Err(PlanningError::invalid_recipe(
                    self.id,
                    format!("{field} per 100g must be >= 0, got {value}"),
                ));
            }
        }
        for ingredient in &self.ingredients {
            if !ingredient.quantity.is_finite() || ingredient.quantity <= 0.0 {
                return Err(PlanningError::invalid_recipe(
                    self.id,
                    format!(
                        "ingredient '{}' must have a quantity > 0, got {}",
                        ingredient.name, ingredient.quantity
                    ),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oatmeal() -> Recipe {
        Recipe::new(1, "Oatmeal", 250.0)
            .with_category(MealSlot::Breakfast)
            .with_nutrition(NutritionPer100g::new(150.0, 5.0, 27.0, 3.0, 4.0))
            .with_ingredient(Ingredient::new(80.0, "g", "oats"))
    }

    #[test]
    fn test_valid_recipe_passes() {
        assert!(oatmeal().validate().is_ok());
    }

    #[test]
    fn test_recipe_without_category_is_rejected() {
        let mut recipe = oatmeal();
        recipe.categories.clear();
        assert!(matches!(
            recipe.validate(),
            Err(PlanningError::InvalidRecipe { .. })
        ));
    }

    #[test]
    fn test_zero_portion_is_rejected() {
        let mut recipe = oatmeal();
        recipe.portion_grams = 0.0;
        assert!(recipe.validate().is_err());
    }

    #[test]
    fn test_meal_slot_parsing_is_case_insensitive() {
        assert_eq!("Dinner".parse::<MealSlot>(), Ok(MealSlot::Dinner));
        assert!("brunch".parse::<MealSlot>().is_err());
    }

    #[test]
    fn test_category_alias_deserializes() {
        let json = r#"{
            "id": 7,
            "name": "Toast",
            "category": ["breakfast", "snack"],
            "portion_grams": 120,
            "nutrition_per_100g": {"calories": 260, "protein": 9, "carbohydrates": 48, "fat": 3}
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.id, RecipeId(7));
        assert!(recipe.has_category(MealSlot::Snack));
        assert!(recipe.ingredients.is_empty());
    }
}
