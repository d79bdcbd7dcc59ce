// ABOUTME: Core data models for meal-plan composition and nutrition aggregation
// ABOUTME: Re-exports Recipe, WeekPlan, CandidateGrid, NutritionFacts and shopping list types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain data exchanged between the planning engine and its collaborators.
//!
//! ## Core Models
//!
//! - `Recipe`: catalog entity with meal-time categories, nutrition and ingredients
//! - `WeekPlan`: the always-complete 7x4 grid of `MealEntry` values
//! - `CandidateGrid`: proposed recipe ids per slot, before validation
//! - `NutritionFacts` / `WeeklyNutrition`: derived nutrition totals
//! - `AggregatedIngredient`: one merged shopping list line

// Domain modules
mod candidate;
mod nutrition;
mod plan;
mod recipe;
mod shopping;

// Recipe domain
pub use recipe::{Ingredient, MealSlot, NutritionPer100g, Recipe, RecipeId};

// Plan domain
pub use plan::{DayMeals, DayOfWeek, MealEntry, SavedWeekPlan, WeekPlan};

// Suggestion boundary
pub use candidate::CandidateGrid;

// Derived views
pub use nutrition::{DailyNutrition, NutritionFacts, WeeklyNutrition};
pub use shopping::{AggregatedIngredient, ShoppingListEntry};
