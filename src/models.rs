// ABOUTME: Core data models re-exported from the pierre-meal-core foundation crate
// ABOUTME: Recipe, WeekPlan, CandidateGrid, nutrition totals, and shopping list lines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models

pub use pierre_meal_core::models::{
    AggregatedIngredient, CandidateGrid, DailyNutrition, DayMeals, DayOfWeek, Ingredient,
    MealEntry, MealSlot, NutritionFacts, NutritionPer100g, Recipe, RecipeId, SavedWeekPlan,
    ShoppingListEntry, WeekPlan, WeeklyNutrition,
};
