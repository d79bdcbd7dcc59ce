// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: File loading and JSON output helpers for pierre-meal-cli
// ABOUTME: Accepts plain plans, saved plan records, and compose output as plan files

use std::fs;
use std::path::Path;

use pierre_meal_planner::{
    catalog::InMemoryRecipeCatalog,
    errors::{AppError, AppResult},
    models::{SavedWeekPlan, WeekPlan},
};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

type Result<T> = AppResult<T>;

/// A plan file in any of the shapes the CLI reads
pub enum PlanDocument {
    /// `{ name, meals, created_at, updated_at }`
    Saved(SavedWeekPlan),
    /// Bare week plan, or the `plan` field of compose output
    Plain(WeekPlan),
}

impl PlanDocument {
    pub const fn plan(&self) -> &WeekPlan {
        match self {
            Self::Saved(saved) => &saved.meals,
            Self::Plain(plan) => plan,
        }
    }

    /// Swap in `meals`, keeping the saved-record wrapper if there was one
    pub fn replace_meals(self, meals: WeekPlan) -> Self {
        match self {
            Self::Saved(mut saved) => {
                saved.replace_meals(meals);
                Self::Saved(saved)
            }
            Self::Plain(_) => Self::Plain(meals),
        }
    }

    pub fn to_json(&self) -> Result<Value> {
        Ok(match self {
            Self::Saved(saved) => serde_json::to_value(saved)?,
            Self::Plain(plan) => serde_json::to_value(plan)?,
        })
    }
}

pub fn load_catalog(path: &Path) -> Result<InMemoryRecipeCatalog> {
    InMemoryRecipeCatalog::from_json_file(path)
        .map_err(|e| AppError::invalid_input(format!("{}: {e}", path.display())))
}

pub fn load_plan(path: &Path) -> Result<PlanDocument> {
    debug!(path = %path.display(), "Reading plan");
    plan_document_from_value(serde_json::from_str(&fs::read_to_string(path)?)?)
}

/// Classify a parsed plan file; compose output is unwrapped from its `plan` field first
fn plan_document_from_value(mut document: Value) -> Result<PlanDocument> {
    if let Some(plan) = document.get_mut("plan") {
        document = plan.take();
    }
    if document.get("meals").is_some() {
        return Ok(PlanDocument::Saved(serde_json::from_value(document)?));
    }
    Ok(PlanDocument::Plain(serde_json::from_value(document)?))
}

/// Pretty-print `value` as JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pierre_meal_planner::intelligence::assign_slot;
    use pierre_meal_planner::models::{DayOfWeek, MealSlot, RecipeId};
    use serde_json::json;

    fn sample_plan() -> WeekPlan {
        assign_slot(
            WeekPlan::new(),
            DayOfWeek::Wednesday,
            MealSlot::Dinner,
            Some(RecipeId(5)),
            320.0,
        )
        .unwrap()
    }

    fn assert_sample(document: &PlanDocument) {
        let entry = document.plan().entry(DayOfWeek::Wednesday, MealSlot::Dinner);
        assert_eq!(entry.recipe_id(), Some(RecipeId(5)));
        assert!((entry.quantity() - 320.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_named_compose_output_loads_as_saved_plan() {
        let saved = serde_json::to_value(SavedWeekPlan::new("Week1", sample_plan())).unwrap();
        let document =
            plan_document_from_value(json!({ "plan": saved, "warnings": [] })).unwrap();
        assert!(matches!(&document, PlanDocument::Saved(s) if s.name == "Week1"));
        assert_sample(&document);
    }

    #[test]
    fn test_unnamed_compose_output_loads_as_plain_plan() {
        let plan = serde_json::to_value(sample_plan()).unwrap();
        let document =
            plan_document_from_value(json!({ "plan": plan, "warnings": [] })).unwrap();
        assert!(matches!(document, PlanDocument::Plain(_)));
        assert_sample(&document);
    }

    #[test]
    fn test_saved_and_bare_plan_files_load() {
        let saved = serde_json::to_value(SavedWeekPlan::new("Week2", sample_plan())).unwrap();
        assert!(matches!(
            plan_document_from_value(saved).unwrap(),
            PlanDocument::Saved(_)
        ));

        let bare = serde_json::to_value(sample_plan()).unwrap();
        let document = plan_document_from_value(bare).unwrap();
        assert!(matches!(document, PlanDocument::Plain(_)));
        assert_sample(&document);
    }
}
