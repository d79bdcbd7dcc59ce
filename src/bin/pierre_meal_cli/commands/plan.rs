// ABOUTME: Plan commands for pierre-meal-cli
// ABOUTME: Manual slot assignment, shopping list and nutrition totals for an existing plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use pierre_meal_planner::{
    config::PlanningConfig,
    errors::AppResult,
    intelligence::assign_slot,
    models::{DayOfWeek, MealSlot, RecipeId},
    services::{nutrition_for_plan, shopping_list_for_plan, ShoppingListOptions},
};
use tracing::info;

use crate::helpers::io::{load_catalog, load_plan, print_json};

type Result<T> = AppResult<T>;

/// Set one slot and print the updated plan in the shape it was read
pub fn assign(
    plan_path: &Path,
    day: DayOfWeek,
    slot: MealSlot,
    recipe_id: Option<RecipeId>,
    quantity: f64,
) -> Result<()> {
    let document = load_plan(plan_path)?;
    let updated = assign_slot(*document.plan(), day, slot, recipe_id, quantity)?;
    info!(day = %day, slot = %slot, ?recipe_id, quantity, "Slot assigned manually");

    print_json(&document.replace_meals(updated).to_json()?)
}

/// Print the aggregated shopping list for a plan
pub fn shopping_list(
    config: &PlanningConfig,
    catalog_path: &Path,
    plan_path: &Path,
    skip_empty: bool,
) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;
    let document = load_plan(plan_path)?;

    let lines = shopping_list_for_plan(
        document.plan(),
        &catalog,
        &config.scaling,
        ShoppingListOptions { skip_empty },
    )?;
    print_json(&lines)
}

/// Print per-day and per-week nutrition totals for a plan
pub fn nutrition(catalog_path: &Path, plan_path: &Path) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;
    let document = load_plan(plan_path)?;
    print_json(&nutrition_for_plan(document.plan(), &catalog))
}
