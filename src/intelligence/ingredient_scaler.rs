// ABOUTME: Linear scaling of a recipe's ingredient list between portion sizes
// ABOUTME: Quantities are multiplied by to/from and rounded to the configured decimal places
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::round_to_places;
use crate::config::ScalingConfig;
use crate::errors::PlanningError;
use crate::models::{Ingredient, Recipe};

/// Scale `ingredients` from `from_portion_grams` to `to_portion_grams`
///
/// Units and names are unchanged. A target of 0 yields an all-zero list.
///
/// # Errors
///
/// Returns `PlanningError::InvalidPortion` when `from_portion_grams` is not positive
/// and `PlanningError::NegativeQuantity` when `to_portion_grams` is negative
pub fn scale_ingredients(
    ingredients: &[Ingredient],
    from_portion_grams: f64,
    to_portion_grams: f64,
    config: &ScalingConfig,
) -> Result<Vec<Ingredient>, PlanningError> {
    if from_portion_grams.is_nan() || from_portion_grams <= 0.0 {
        return Err(PlanningError::InvalidPortion {
            portion: from_portion_grams,
        });
    }
    if to_portion_grams.is_nan() || to_portion_grams < 0.0 {
        return Err(PlanningError::NegativeQuantity {
            quantity: to_portion_grams,
        });
    }

    let factor = to_portion_grams / from_portion_grams;
    Ok(ingredients
        .iter()
        .map(|ingredient| Ingredient {
            quantity: round_to_places(ingredient.quantity * factor, config.decimal_places),
            ..ingredient.clone()
        })
        .collect())
}

/// Scale a recipe's ingredients from its reference portion to `to_portion_grams`
///
/// # Errors
///
/// Same conditions as [`scale_ingredients`]
pub fn scale_recipe(
    recipe: &Recipe,
    to_portion_grams: f64,
    config: &ScalingConfig,
) -> Result<Vec<Ingredient>, PlanningError> {
    scale_ingredients(
        &recipe.ingredients,
        recipe.portion_grams,
        to_portion_grams,
        config,
    )
}
