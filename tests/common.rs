// ABOUTME: Shared test utilities and fixtures for meal planner integration tests
// ABOUTME: Provides quiet logging setup plus a small recipe catalog and candidate grids
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `pierre_meal_planner`

use std::env;
use std::sync::Once;

use pierre_meal_planner::{
    catalog::InMemoryRecipeCatalog,
    models::{CandidateGrid, DayOfWeek, Ingredient, MealSlot, NutritionPer100g, Recipe, RecipeId},
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

pub const OATMEAL: RecipeId = RecipeId(1);
pub const CHICKEN_SALAD: RecipeId = RecipeId(2);
pub const APPLE_YOGURT: RecipeId = RecipeId(3);
pub const LENTIL_SOUP: RecipeId = RecipeId(4);
pub const BEEF_STEW: RecipeId = RecipeId(5);
pub const BLACK_COFFEE: RecipeId = RecipeId(6);

/// Six recipes with calorie densities chosen so that a 2000 kcal target sizes to whole grams
pub fn fixture_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new(OATMEAL, "Oatmeal", 250.0)
            .with_category(MealSlot::Breakfast)
            .with_nutrition(NutritionPer100g::new(200.0, 5.0, 30.0, 4.0, 3.0))
            .with_ingredient(Ingredient::new(80.0, "g", "oats"))
            .with_ingredient(Ingredient::new(200.0, "ml", "milk"))
            .with_ingredient(Ingredient::new(10.0, "g", "honey"))
            .with_instruction("Simmer oats in milk for five minutes")
            .with_instruction("Stir in honey"),
        Recipe::new(CHICKEN_SALAD, "Chicken Salad", 300.0)
            .with_category(MealSlot::Lunch)
            .with_nutrition(NutritionPer100g::new(160.0, 20.0, 4.0, 7.0, 2.0))
            .with_ingredient(Ingredient::new(150.0, "g", "chicken breast"))
            .with_ingredient(Ingredient::new(100.0, "g", "lettuce"))
            .with_ingredient(Ingredient::new(1.0, "tbsp", "olive oil")),
        Recipe::new(APPLE_YOGURT, "Apple Yogurt", 200.0)
            .with_category(MealSlot::Snack)
            .with_nutrition(NutritionPer100g::new(100.0, 4.0, 15.0, 2.0, 1.0))
            .with_ingredient(Ingredient::new(150.0, "g", "yogurt"))
            .with_ingredient(Ingredient::new(1.0, "pc", "apple")),
        Recipe::new(LENTIL_SOUP, "Lentil Soup", 400.0)
            .with_category(MealSlot::Lunch)
            .with_category(MealSlot::Dinner)
            .with_nutrition(NutritionPer100g::new(100.0, 6.0, 15.0, 1.0, 4.0))
            .with_ingredient(Ingredient::new(100.0, "g", "lentils"))
            .with_ingredient(Ingredient::new(50.0, "g", "Onion"))
            .with_ingredient(Ingredient::new(500.0, "ml", "water")),
        Recipe::new(BEEF_STEW, "Beef Stew", 400.0)
            .with_category(MealSlot::Dinner)
            .with_nutrition(NutritionPer100g::new(200.0, 15.0, 8.0, 12.0, 2.0))
            .with_ingredient(Ingredient::new(200.0, "g", "beef"))
            .with_ingredient(Ingredient::new(30.0, "g", "onion")),
        Recipe::new(BLACK_COFFEE, "Black Coffee", 250.0)
            .with_category(MealSlot::Snack)
            .with_ingredient(Ingredient::new(10.0, "g", "ground coffee")),
    ]
}

pub fn fixture_catalog() -> InMemoryRecipeCatalog {
    InMemoryRecipeCatalog::from_recipes(fixture_recipes()).unwrap()
}

/// Oatmeal, chicken salad, apple yogurt and lentil soup on every day
pub fn full_grid() -> CandidateGrid {
    let mut grid = CandidateGrid::empty();
    for day in DayOfWeek::ALL {
        grid.set(day, MealSlot::Breakfast, Some(OATMEAL));
        grid.set(day, MealSlot::Lunch, Some(CHICKEN_SALAD));
        grid.set(day, MealSlot::Snack, Some(APPLE_YOGURT));
        grid.set(day, MealSlot::Dinner, Some(LENTIL_SOUP));
    }
    grid
}
