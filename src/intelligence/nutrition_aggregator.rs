// ABOUTME: Nutrition totals per meal, per day and per week for a composed plan
// ABOUTME: Sums raw values and rounds once at the reported level
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrition Aggregation
//!
//! Calories are reported as whole kcal and macros to one decimal place. Day and
//! week totals are summed from unrounded meal values and rounded at the end.

use tracing::debug;

use super::round_to_places;
use crate::catalog::RecipeCatalog;
use crate::constants::nutrition::REFERENCE_GRAMS;
use crate::constants::rounding::MACRO_DECIMAL_PLACES;
use crate::models::{
    DailyNutrition, DayMeals, DayOfWeek, NutritionFacts, Recipe, WeekPlan, WeeklyNutrition,
};

fn raw_meal(recipe: &Recipe, quantity_grams: f64) -> NutritionFacts {
    let per_100g = &recipe.nutrition_per_100g;
    let factor = quantity_grams / REFERENCE_GRAMS;
    NutritionFacts {
        calories: per_100g.calories * factor,
        protein: per_100g.protein * factor,
        carbohydrates: per_100g.carbohydrates * factor,
        fat: per_100g.fat * factor,
        fiber: per_100g.fiber * factor,
    }
}

fn for_display(raw: NutritionFacts) -> NutritionFacts {
    NutritionFacts {
        calories: raw.calories.round(),
        ..raw.map(|value| round_to_places(value, MACRO_DECIMAL_PLACES))
    }
}

fn raw_day<C>(meals: &DayMeals, catalog: &C) -> NutritionFacts
where
    C: RecipeCatalog + ?Sized,
{
    meals
        .iter()
        .filter_map(|(slot, entry)| {
            let recipe_id = entry.recipe_id()?;
            let Some(recipe) = catalog.get_by_id(recipe_id) else {
                debug!(%recipe_id, slot = %slot, "Skipping dangling recipe reference");
                return None;
            };
            Some(raw_meal(&recipe, entry.quantity()))
        })
        .sum()
}

/// Nutrition of `quantity_grams` of `recipe`, rounded for display
#[must_use]
pub fn per_meal(recipe: &Recipe, quantity_grams: f64) -> NutritionFacts {
    for_display(raw_meal(recipe, quantity_grams))
}

/// Totals over a day's four slots
///
/// Unassigned entries and dangling references contribute zero.
#[must_use]
pub fn per_day<C>(meals: &DayMeals, catalog: &C) -> NutritionFacts
where
    C: RecipeCatalog + ?Sized,
{
    for_display(raw_day(meals, catalog))
}

/// Week total plus the per-day breakdown, Monday first
#[must_use]
pub fn per_week<C>(plan: &WeekPlan, catalog: &C) -> WeeklyNutrition
where
    C: RecipeCatalog + ?Sized,
{
    let raw_days: Vec<(DayOfWeek, NutritionFacts)> = DayOfWeek::ALL
        .into_iter()
        .map(|day| (day, raw_day(plan.day(day), catalog)))
        .collect();

    let total = for_display(raw_days.iter().map(|(_, totals)| *totals).sum());
    let daily = raw_days
        .into_iter()
        .map(|(day, totals)| DailyNutrition {
            day,
            totals: for_display(totals),
        })
        .collect();

    WeeklyNutrition { total, daily }
}
