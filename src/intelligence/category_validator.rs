// ABOUTME: Meal-time category validation for recipe-to-slot assignments
// ABOUTME: A recipe is legal for a slot iff the slot is one of its categories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::{MealSlot, Recipe};

/// Whether `recipe` may be planned for `slot`
///
/// Pure and total. A missing recipe is the caller's concern, not a `false` here.
#[must_use]
pub fn is_valid_for_slot(recipe: &Recipe, slot: MealSlot) -> bool {
    recipe.has_category(slot)
}

/// Slots `recipe` may be planned for, in display order
pub fn valid_slots(recipe: &Recipe) -> impl Iterator<Item = MealSlot> + '_ {
    MealSlot::ALL
        .into_iter()
        .filter(move |slot| is_valid_for_slot(recipe, *slot))
}
