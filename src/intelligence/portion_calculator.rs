// ABOUTME: Converts a daily calorie target into a gram quantity for one slot and recipe
// ABOUTME: Uses the configured per-slot allocation and the recipe's calorie density
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Portion sizing
//!
//! `grams = round(daily_target * allocation[slot] / calories_per_100g * 100)`

use crate::config::SlotAllocationConfig;
use crate::constants::nutrition::REFERENCE_GRAMS;
use crate::errors::PlanningError;
use crate::models::{MealSlot, Recipe};

/// Validate a daily calorie target
///
/// # Errors
///
/// Returns `PlanningError::InvalidCalorieTarget` for a negative or non-finite target
pub fn check_calorie_target(daily_calorie_target: f64) -> Result<(), PlanningError> {
    if !daily_calorie_target.is_finite() || daily_calorie_target < 0.0 {
        return Err(PlanningError::InvalidCalorieTarget {
            target: daily_calorie_target,
        });
    }
    Ok(())
}

/// Calories of the daily target allocated to `slot`
#[must_use]
pub fn allocated_calories(
    daily_calorie_target: f64,
    slot: MealSlot,
    allocation: &SlotAllocationConfig,
) -> f64 {
    daily_calorie_target * allocation.share(slot)
}

/// Whole grams of `recipe` that meet the slot's share of `daily_calorie_target`
///
/// # Errors
///
/// Returns `PlanningError::ZeroCalorieDensity` when the recipe has no calories per 100g
/// (callers fall back to quantity 0), and `InvalidCalorieTarget` for a bad target
pub fn compute_quantity(
    daily_calorie_target: f64,
    slot: MealSlot,
    recipe: &Recipe,
    allocation: &SlotAllocationConfig,
) -> Result<f64, PlanningError> {
    check_calorie_target(daily_calorie_target)?;

    let density = recipe.nutrition_per_100g.calories;
    if density.is_nan() || density <= 0.0 {
        return Err(PlanningError::ZeroCalorieDensity {
            recipe_id: recipe.id,
        });
    }

    let calories = allocated_calories(daily_calorie_target, slot, allocation);
    Ok((calories / density * REFERENCE_GRAMS).round())
}
