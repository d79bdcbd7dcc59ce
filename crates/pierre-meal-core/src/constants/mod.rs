// ABOUTME: Application constants for week plan geometry, rounding, and configuration
// ABOUTME: Central place for magic numbers and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants shared across the meal planner crates.

/// Week plan geometry
pub mod plan {
    /// Days in a week plan
    pub const DAYS_PER_WEEK: usize = 7;
    /// Meal slots in a day
    pub const SLOTS_PER_DAY: usize = 4;
    /// Total entries in a week plan
    pub const ENTRIES_PER_WEEK: usize = DAYS_PER_WEEK * SLOTS_PER_DAY;
}

/// Rounding precision for derived quantities
pub mod rounding {
    /// Decimal places kept when scaling ingredient quantities
    pub const INGREDIENT_DECIMAL_PLACES: u32 = 2;
    /// Decimal places kept for macronutrients (protein, carbs, fat, fiber)
    pub const MACRO_DECIMAL_PLACES: u32 = 1;
    /// Upper bound on configurable decimal places
    pub const MAX_DECIMAL_PLACES: u32 = 6;
}

/// Nutrition reference values
pub mod nutrition {
    /// Nutrition facts are expressed per this many grams
    pub const REFERENCE_GRAMS: f64 = 100.0;
    /// Lowest daily calorie target the target helper will suggest
    pub const MIN_DAILY_CALORIE_TARGET: f64 = 1200.0;
}

/// Shopping list aggregation
pub mod shopping {
    /// Separator between normalized name and unit in aggregation keys.
    /// ASCII unit separator; never appears in ingredient names or units.
    pub const KEY_SEPARATOR: char = '\u{1f}';
}

/// Environment variable names read by configuration loaders
pub mod env_config {
    /// Breakfast share of the daily calorie target
    pub const ALLOCATION_BREAKFAST: &str = "MEAL_PLAN_ALLOCATION_BREAKFAST";
    /// Lunch share of the daily calorie target
    pub const ALLOCATION_LUNCH: &str = "MEAL_PLAN_ALLOCATION_LUNCH";
    /// Snack share of the daily calorie target
    pub const ALLOCATION_SNACK: &str = "MEAL_PLAN_ALLOCATION_SNACK";
    /// Dinner share of the daily calorie target
    pub const ALLOCATION_DINNER: &str = "MEAL_PLAN_ALLOCATION_DINNER";
    /// Category mismatch policy (`keep` or `reject`)
    pub const CATEGORY_POLICY: &str = "MEAL_PLAN_CATEGORY_POLICY";
    /// Decimal places for scaled ingredient quantities
    pub const SCALE_DECIMALS: &str = "MEAL_PLAN_SCALE_DECIMALS";
    /// Calorie deficit applied for weight loss goals
    pub const GOAL_DEFICIT_KCAL: &str = "MEAL_PLAN_GOAL_DEFICIT_KCAL";
    /// Calorie surplus applied for weight gain goals
    pub const GOAL_SURPLUS_KCAL: &str = "MEAL_PLAN_GOAL_SURPLUS_KCAL";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Library / CLI service name
    pub const PIERRE_MEAL_PLANNER: &str = "pierre-meal-planner";
}
