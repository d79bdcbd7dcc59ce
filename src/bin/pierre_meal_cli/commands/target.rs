// ABOUTME: Calorie target command for pierre-meal-cli
// ABOUTME: Prints BMR, TDEE and the daily calorie target for a set of body metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_meal_planner::{
    config::PlanningConfig,
    errors::AppResult,
    intelligence::{
        basal_metabolic_rate, daily_calorie_target, daily_energy_expenditure, ProfileMetrics,
    },
};
use serde_json::json;

use crate::helpers::io::print_json;

type Result<T> = AppResult<T>;

pub fn run(config: &PlanningConfig, profile: &ProfileMetrics) -> Result<()> {
    let targets = &config.calorie_target;
    let bmr = basal_metabolic_rate(profile, &targets.bmr)?;
    let tdee = daily_energy_expenditure(bmr, profile.activity_level, &targets.activity_factors)?;
    let target = daily_calorie_target(profile, targets)?;

    print_json(&json!({
        "profile": profile,
        "bmr": bmr.round(),
        "tdee": tdee.round(),
        "daily_calorie_target": target,
    }))
}
