// ABOUTME: Criterion benchmarks for the planning engine
// ABOUTME: Measures week composition, shopping list building and weekly nutrition totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the planning engine.
//!
//! Catalog sizes vary so the cost of catalog lookups shows up separately from
//! the fixed 28-slot composition work.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pierre_meal_planner::catalog::InMemoryRecipeCatalog;
use pierre_meal_planner::config::{PlanningConfig, ScalingConfig};
use pierre_meal_planner::intelligence::{aggregate, WeeklyPlanComposer};
use pierre_meal_planner::models::{
    CandidateGrid, DayOfWeek, Ingredient, MealSlot, NutritionPer100g, Recipe, RecipeId,
    ShoppingListEntry,
};
use pierre_meal_planner::services::{
    nutrition_for_plan, shopping_list_for_plan, ShoppingListOptions,
};

const PANTRY: [&str; 12] = [
    "oats", "milk", "egg", "rice", "chicken", "onion", "garlic", "tomato", "lentils", "olive oil",
    "spinach", "yogurt",
];

#[allow(clippy::cast_precision_loss)]
fn generate_catalog(count: u64) -> InMemoryRecipeCatalog {
    let recipes = (1..=count).map(|id| {
        let slot = MealSlot::ALL[(id % 4) as usize];
        let ingredients = (0..6).map(|offset| {
            let name = PANTRY[((id + offset) % PANTRY.len() as u64) as usize];
            Ingredient::new(10.0 + (id % 90) as f64, "g", name)
        });
        ingredients.fold(
            Recipe::new(id, format!("Recipe {id}"), 250.0)
                .with_category(slot)
                .with_nutrition(NutritionPer100g::new(
                    80.0 + (id % 200) as f64,
                    8.0,
                    20.0,
                    5.0,
                    2.0,
                )),
            Recipe::with_ingredient,
        )
    });
    InMemoryRecipeCatalog::from_recipes(recipes).unwrap_or_default()
}

fn generate_grid(count: u64) -> CandidateGrid {
    let blocks = (count / 4).saturating_sub(1).max(1);
    let mut grid = CandidateGrid::empty();
    for (index, day) in DayOfWeek::ALL.into_iter().enumerate() {
        for slot in MealSlot::ALL {
            let position = slot.index() as u64;
            // ids congruent to the slot index mod 4 are categorized for that slot
            let block = 1 + (index as u64 * 4 + position) % blocks;
            grid.set(day, slot, Some(RecipeId(block * 4 + position)));
        }
    }
    grid
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");
    let composer = WeeklyPlanComposer::new(&PlanningConfig::default());

    for count in [40_u64, 400, 4_000] {
        let catalog = generate_catalog(count);
        let grid = generate_grid(count);
        group.throughput(Throughput::Elements(28));
        group.bench_with_input(BenchmarkId::new("week", count), &grid, |b, grid| {
            b.iter(|| composer.compose(black_box(grid), &catalog, black_box(2000.0)));
        });
    }
    group.finish();
}

fn bench_shopping_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("shopping_list");

    let catalog = generate_catalog(400);
    let plan = WeeklyPlanComposer::new(&PlanningConfig::default())
        .compose(&generate_grid(400), &catalog, 2000.0)
        .map(|composition| composition.plan)
        .unwrap_or_default();
    group.bench_function("plan", |b| {
        b.iter(|| {
            shopping_list_for_plan(
                black_box(&plan),
                &catalog,
                &ScalingConfig::default(),
                ShoppingListOptions::default(),
            )
        });
    });

    for recipes in [10_usize, 100, 1_000] {
        let entries: Vec<ShoppingListEntry> = catalog
            .recipes()
            .cycle()
            .take(recipes)
            .map(|recipe| ShoppingListEntry::new(recipe.name.clone(), recipe.ingredients.clone()))
            .collect();
        group.throughput(Throughput::Elements(recipes as u64));
        group.bench_with_input(
            BenchmarkId::new("aggregate", recipes),
            &entries,
            |b, entries| b.iter(|| aggregate(black_box(entries))),
        );
    }
    group.finish();
}

fn bench_nutrition(c: &mut Criterion) {
    let catalog = generate_catalog(400);
    let plan = WeeklyPlanComposer::new(&PlanningConfig::default())
        .compose(&generate_grid(400), &catalog, 2000.0)
        .map(|composition| composition.plan)
        .unwrap_or_default();

    c.bench_function("nutrition/week", |b| {
        b.iter(|| nutrition_for_plan(black_box(&plan), &catalog));
    });
}

criterion_group!(benches, bench_compose, bench_shopping_list, bench_nutrition);
criterion_main!(benches);
