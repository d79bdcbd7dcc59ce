// ABOUTME: Planning engine: category validation, portion sizing, scaling, and aggregation
// ABOUTME: Declares engine submodules and re-exports their public API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! The computational core of the meal planner. Every operation here is synchronous
//! and free of I/O; batch operations fan out on the rayon pool and merge sequentially.
//!
//! Leaves first:
//! - `category_validator` - is a recipe legal for a slot
//! - `portion_calculator` - daily calorie target to grams for one slot
//! - `ingredient_scaler` - linear ingredient scaling between portion sizes
//! - `shopping_list` - case-insensitive, unit-aware ingredient merging
//! - `nutrition_aggregator` - per meal, per day, and per week totals
//! - `plan_composer` - candidate grid to validated, quantified week plan
//! - `calorie_target` - BMR / TDEE based daily calorie target

/// Daily calorie target from profile metrics
pub mod calorie_target;
/// Meal-time category checks
pub mod category_validator;
/// Ingredient list scaling
pub mod ingredient_scaler;
/// Nutrition totals for meals, days, and weeks
pub mod nutrition_aggregator;
/// Week plan composition from candidate grids
pub mod plan_composer;
/// Gram quantities from calorie targets
pub mod portion_calculator;
/// Shopping list aggregation
pub mod shopping_list;

pub use calorie_target::{
    basal_metabolic_rate, daily_calorie_target, daily_energy_expenditure, ActivityLevel,
    ProfileMetrics, Sex, WeightGoal,
};
pub use category_validator::{is_valid_for_slot, valid_slots};
pub use ingredient_scaler::{scale_ingredients, scale_recipe};
pub use nutrition_aggregator::{per_day, per_meal, per_week};
pub use plan_composer::{assign_slot, Composition, PlanWarning, WarningKind, WeeklyPlanComposer};
pub use portion_calculator::{allocated_calories, check_calorie_target, compute_quantity};
pub use shopping_list::aggregate;

/// Round `value` to `places` decimal places, half away from zero
#[must_use]
pub fn round_to_places(value: f64, places: u32) -> f64 {
    let factor = 10_f64.powf(f64::from(places));
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_places() {
        assert!((round_to_places(1.234_5, 2) - 1.23).abs() < 1e-9);
        assert!((round_to_places(2.5, 0) - 3.0).abs() < 1e-9);
        assert!((round_to_places(0.05, 1) - 0.1).abs() < 1e-9);
    }
}
