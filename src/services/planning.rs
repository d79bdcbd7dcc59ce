// ABOUTME: Orchestrates suggestion, composition, shopping list and nutrition for a week plan
// ABOUTME: The provider is awaited once in full before synchronous composition starts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::catalog::RecipeCatalog;
use crate::config::ScalingConfig;
use crate::errors::{AppResult, PlanningError};
use crate::intelligence::{aggregate, per_week, scale_recipe, Composition, WeeklyPlanComposer};
use crate::models::{
    AggregatedIngredient, MealEntry, ShoppingListEntry, WeekPlan, WeeklyNutrition,
};
use crate::providers::{SuggestionProvider, SuggestionRequest};

/// Ask `provider` for a week and compose it against `catalog`
///
/// # Errors
///
/// Returns the provider's error, or a `PlanningError` for a bad calorie target
#[instrument(skip(provider, catalog, composer), fields(provider = provider.name()))]
pub async fn plan_week<P, C>(
    provider: &P,
    catalog: &C,
    composer: &WeeklyPlanComposer,
    daily_calorie_target: f64,
) -> AppResult<Composition>
where
    P: SuggestionProvider + ?Sized,
    C: RecipeCatalog + ?Sized,
{
    let request = SuggestionRequest::from_catalog(catalog, daily_calorie_target);
    let grid = provider.suggest_week(&request).await?;
    Ok(composer.compose(&grid, catalog, daily_calorie_target)?)
}

/// Shopping list behaviour switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingListOptions {
    /// Drop ingredients whose scaled quantity is zero
    pub skip_empty: bool,
}

/// Scaled ingredient lists for every assigned, resolvable entry of `plan`
///
/// Entries whose recipe no longer exists are skipped.
///
/// # Errors
///
/// Returns `PlanningError` if a recipe cannot be scaled to its planned quantity
pub fn shopping_list_entries<C>(
    plan: &WeekPlan,
    catalog: &C,
    scaling: &ScalingConfig,
) -> Result<Vec<ShoppingListEntry>, PlanningError>
where
    C: RecipeCatalog + ?Sized,
{
    let assigned: Vec<MealEntry> = plan
        .entries()
        .filter(|(_, _, entry)| entry.is_assigned())
        .map(|(_, _, entry)| *entry)
        .collect();

    assigned
        .into_par_iter()
        .filter_map(|entry| {
            let recipe_id = entry.recipe_id()?;
            let Some(recipe) = catalog.get_by_id(recipe_id) else {
                debug!(%recipe_id, "Skipping dangling recipe reference");
                return None;
            };
            Some(
                scale_recipe(&recipe, entry.quantity(), scaling)
                    .map(|ingredients| ShoppingListEntry::new(recipe.name, ingredients)),
            )
        })
        .collect()
}

/// Deduplicated shopping list for `plan`
///
/// # Errors
///
/// Returns `PlanningError` if a recipe cannot be scaled to its planned quantity
pub fn shopping_list_for_plan<C>(
    plan: &WeekPlan,
    catalog: &C,
    scaling: &ScalingConfig,
    options: ShoppingListOptions,
) -> AppResult<Vec<AggregatedIngredient>>
where
    C: RecipeCatalog + ?Sized,
{
    let mut entries = shopping_list_entries(plan, catalog, scaling)?;
    if options.skip_empty {
        for entry in &mut entries {
            entry.ingredients.retain(|ingredient| ingredient.quantity > 0.0);
        }
    }

    let lines = aggregate(&entries);
    info!(
        recipes = entries.len(),
        lines = lines.len(),
        skip_empty = options.skip_empty,
        "Shopping list built"
    );
    Ok(lines)
}

/// Weekly nutrition totals for `plan`
#[must_use]
pub fn nutrition_for_plan<C>(plan: &WeekPlan, catalog: &C) -> WeeklyNutrition
where
    C: RecipeCatalog + ?Sized,
{
    per_week(plan, catalog)
}
