// ABOUTME: Weekly plan composition from a candidate grid of recipe ids
// ABOUTME: Resolves, validates and sizes every slot and collects per-slot anomalies as warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Weekly Plan Composer
//!
//! For each of the 28 day/slot cells:
//! 1. resolve the candidate id through the catalog (missing → unassigned + warning)
//! 2. check the recipe's meal-time categories (mismatch → warning, then the
//!    configured [`CategoryPolicy`] decides whether the assignment is kept)
//! 3. size the portion from the daily calorie target (zero density → 0 g + warning)
//!
//! Cells are independent and are resolved on the rayon pool; the plan is
//! assembled sequentially afterwards so warnings come out in day/slot order.
//! Only a bad calorie target aborts composition.

use std::fmt::{self, Display, Formatter};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::category_validator::is_valid_for_slot;
use super::portion_calculator::{check_calorie_target, compute_quantity};
use crate::catalog::RecipeCatalog;
use crate::config::{CategoryPolicy, PlanningConfig, SlotAllocationConfig};
use crate::errors::PlanningError;
use crate::models::{CandidateGrid, DayOfWeek, MealEntry, MealSlot, RecipeId, WeekPlan};

/// Kind of non-fatal anomaly found while composing a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// Candidate id not found in the catalog; slot left unassigned
    MissingRecipe,
    /// Recipe is not categorized for the slot's meal time
    CategoryMismatch,
    /// Recipe has no calories per 100g; quantity forced to 0
    ZeroCalorieDensity,
}

impl WarningKind {
    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MissingRecipe => "missing_recipe",
            Self::CategoryMismatch => "category_mismatch",
            Self::ZeroCalorieDensity => "zero_calorie_density",
        }
    }
}

/// A per-slot anomaly attached to a [`Composition`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanWarning {
    /// Day of the affected slot
    pub day: DayOfWeek,
    /// Affected slot
    pub slot: MealSlot,
    /// Candidate recipe id that triggered the warning
    pub recipe_id: RecipeId,
    /// What went wrong
    pub kind: WarningKind,
}

impl Display for PlanWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: recipe {} {}",
            self.day,
            self.slot,
            self.recipe_id,
            self.kind.as_str()
        )
    }
}

/// Result of composing a week: the plan plus every anomaly recorded on the way
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Composition {
    /// Fully populated 7x4 plan
    pub plan: WeekPlan,
    /// Warnings in day/slot order
    pub warnings: Vec<PlanWarning>,
}

impl Composition {
    /// Warnings of `kind`
    pub fn warnings_of(&self, kind: WarningKind) -> impl Iterator<Item = &PlanWarning> + '_ {
        self.warnings.iter().filter(move |w| w.kind == kind)
    }
}

struct ComposedCell {
    day: DayOfWeek,
    slot: MealSlot,
    entry: MealEntry,
    warnings: Vec<PlanWarning>,
}

/// Turns a candidate grid into a validated, quantified [`WeekPlan`]
#[derive(Debug, Clone, Copy, Default)]
pub struct WeeklyPlanComposer {
    allocation: SlotAllocationConfig,
    policy: CategoryPolicy,
}

impl WeeklyPlanComposer {
    /// Composer using the allocation table and category policy of `config`
    #[must_use]
    pub fn new(config: &PlanningConfig) -> Self {
        Self {
            allocation: config.slot_allocation,
            policy: config.category_policy,
        }
    }

    /// Same composer with a different category policy
    #[must_use]
    pub fn with_policy(mut self, policy: CategoryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Category policy in effect
    #[must_use]
    pub const fn policy(&self) -> CategoryPolicy {
        self.policy
    }

    /// Compose a week plan from `grid`
    ///
    /// Absent cells stay unassigned without a warning. Per-slot anomalies never
    /// abort composition; they are returned in [`Composition::warnings`].
    ///
    /// # Errors
    ///
    /// Returns `PlanningError::InvalidCalorieTarget` for a negative or non-finite target
    pub fn compose<C>(
        &self,
        grid: &CandidateGrid,
        catalog: &C,
        daily_calorie_target: f64,
    ) -> Result<Composition, PlanningError>
    where
        C: RecipeCatalog + ?Sized,
    {
        check_calorie_target(daily_calorie_target)?;

        let cells: Vec<(DayOfWeek, MealSlot, Option<RecipeId>)> = grid.cells().collect();
        let composed = cells
            .into_par_iter()
            .map(|(day, slot, candidate)| {
                self.compose_cell(day, slot, candidate, catalog, daily_calorie_target)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut composition = Composition::default();
        for cell in composed {
            composition.plan.set_entry(cell.day, cell.slot, cell.entry);
            composition.warnings.extend(cell.warnings);
        }

        info!(
            daily_calorie_target,
            assigned = composition.plan.assigned_count(),
            warnings = composition.warnings.len(),
            policy = %self.policy,
            "Week plan composed"
        );
        Ok(composition)
    }

    fn compose_cell<C>(
        &self,
        day: DayOfWeek,
        slot: MealSlot,
        candidate: Option<RecipeId>,
        catalog: &C,
        daily_calorie_target: f64,
    ) -> Result<ComposedCell, PlanningError>
    where
        C: RecipeCatalog + ?Sized,
    {
        let mut cell = ComposedCell {
            day,
            slot,
            entry: MealEntry::unassigned(),
            warnings: Vec::new(),
        };
        let mut record = |recipe_id: RecipeId, kind: WarningKind| {
            warn!(day = %day, slot = %slot, %recipe_id, kind = kind.as_str(), "Plan slot anomaly");
            cell.warnings.push(PlanWarning {
                day,
                slot,
                recipe_id,
                kind,
            });
        };

        let Some(recipe_id) = candidate else {
            debug!(day = %day, slot = %slot, "No candidate for slot");
            return Ok(cell);
        };

        let Some(recipe) = catalog.get_by_id(recipe_id) else {
            record(recipe_id, WarningKind::MissingRecipe);
            return Ok(cell);
        };

        if !is_valid_for_slot(&recipe, slot) {
            record(recipe_id, WarningKind::CategoryMismatch);
            if self.policy == CategoryPolicy::RejectSlot {
                return Ok(cell);
            }
        }

        let quantity = match compute_quantity(daily_calorie_target, slot, &recipe, &self.allocation)
        {
            Ok(grams) => grams,
            Err(PlanningError::ZeroCalorieDensity { .. }) => {
                record(recipe_id, WarningKind::ZeroCalorieDensity);
                0.0
            }
            Err(other) => return Err(other),
        };

        debug!(day = %day, slot = %slot, %recipe_id, quantity, "Slot assigned");
        cell.entry = MealEntry::assigned(recipe_id, quantity)?;
        Ok(cell)
    }
}

/// Manually set one slot, trusting the caller's quantity
///
/// No catalog lookup, category check or portion sizing takes place. Passing
/// `None` clears the slot regardless of `quantity`.
///
/// # Errors
///
/// Returns `PlanningError::NegativeQuantity` for a negative or non-finite quantity
pub fn assign_slot(
    mut plan: WeekPlan,
    day: DayOfWeek,
    slot: MealSlot,
    recipe_id: Option<RecipeId>,
    quantity: f64,
) -> Result<WeekPlan, PlanningError> {
    plan.set_entry(day, slot, MealEntry::new(recipe_id, quantity)?);
    Ok(plan)
}
