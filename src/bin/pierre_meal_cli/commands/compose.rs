// ABOUTME: Compose command for pierre-meal-cli
// ABOUTME: Feeds a grid file through the text suggestion provider and composes the week
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use pierre_meal_planner::{
    config::{CategoryPolicy, PlanningConfig},
    errors::AppResult,
    intelligence::WeeklyPlanComposer,
    models::SavedWeekPlan,
    providers::{StaticCompletion, TextSuggestionProvider},
    services::plan_week,
};
use serde_json::json;
use tokio::fs;
use tracing::info;

use crate::helpers::display::display_composition_summary;
use crate::helpers::io::{load_catalog, print_json};

type Result<T> = AppResult<T>;

/// Compose a week plan and print `{ plan, warnings }`
pub async fn run(
    config: &PlanningConfig,
    catalog_path: &Path,
    grid_path: &Path,
    daily_calorie_target: f64,
    policy: Option<CategoryPolicy>,
    name: Option<String>,
) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;
    let grid_text = fs::read_to_string(grid_path).await?;

    let composer = WeeklyPlanComposer::new(config)
        .with_policy(policy.unwrap_or(config.category_policy));
    let provider = TextSuggestionProvider::new(StaticCompletion(grid_text));

    info!(
        catalog = %catalog_path.display(),
        grid = %grid_path.display(),
        "Composing week plan"
    );
    let composition = plan_week(&provider, &catalog, &composer, daily_calorie_target).await?;
    display_composition_summary(&composition);

    let plan = match name {
        Some(name) => serde_json::to_value(SavedWeekPlan::new(name, composition.plan))?,
        None => serde_json::to_value(composition.plan)?,
    };
    print_json(&json!({
        "plan": plan,
        "warnings": composition.warnings,
    }))
}
