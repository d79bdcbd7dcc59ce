// ABOUTME: Tests for environment-driven planning configuration
// ABOUTME: Env-mutating tests run serially and clean up every variable they set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use pierre_meal_planner::{
    config::{CategoryPolicy, ConfigError, PlanningConfig, SlotAllocationConfig},
    constants::env_config,
    errors::{AppError, ErrorCode},
    models::MealSlot,
};
use serial_test::serial;

const ALL_VARS: [&str; 8] = [
    env_config::ALLOCATION_BREAKFAST,
    env_config::ALLOCATION_LUNCH,
    env_config::ALLOCATION_SNACK,
    env_config::ALLOCATION_DINNER,
    env_config::CATEGORY_POLICY,
    env_config::SCALE_DECIMALS,
    env_config::GOAL_DEFICIT_KCAL,
    env_config::GOAL_SURPLUS_KCAL,
];

fn clear_env() {
    for var in ALL_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = PlanningConfig::load().unwrap();

    assert_eq!(config.category_policy, CategoryPolicy::KeepWithWarning);
    assert_eq!(config.scaling.decimal_places, 2);
    assert!((config.slot_allocation.share(MealSlot::Breakfast) - 0.30).abs() < f64::EPSILON);
    assert!((config.calorie_target.goal_adjustment.deficit_kcal - 500.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_environment_overrides_apply() {
    clear_env();
    env::set_var(env_config::ALLOCATION_BREAKFAST, "0.25");
    env::set_var(env_config::ALLOCATION_LUNCH, "0.35");
    env::set_var(env_config::ALLOCATION_SNACK, "0.15");
    env::set_var(env_config::ALLOCATION_DINNER, "0.25");
    env::set_var(env_config::CATEGORY_POLICY, "reject");
    env::set_var(env_config::SCALE_DECIMALS, "3");
    env::set_var(env_config::GOAL_DEFICIT_KCAL, "400");

    let config = PlanningConfig::load().unwrap();
    clear_env();

    assert_eq!(config.category_policy, CategoryPolicy::RejectSlot);
    assert_eq!(config.scaling.decimal_places, 3);
    assert!((config.slot_allocation.lunch - 0.35).abs() < f64::EPSILON);
    assert!((config.calorie_target.goal_adjustment.deficit_kcal - 400.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_unparseable_value_is_a_parse_error() {
    clear_env();
    env::set_var(env_config::SCALE_DECIMALS, "two");
    let result = PlanningConfig::load();
    clear_env();

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_allocation_not_summing_to_one_fails_validation() {
    clear_env();
    env::set_var(env_config::ALLOCATION_DINNER, "0.5");
    let result = PlanningConfig::load();
    clear_env();

    let error: AppError = result.unwrap_err().into();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_excessive_scale_decimals_fail_validation() {
    clear_env();
    env::set_var(env_config::SCALE_DECIMALS, "9");
    let result = PlanningConfig::load();
    clear_env();

    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
}

#[test]
fn test_out_of_range_share_is_rejected() {
    let allocation = SlotAllocationConfig {
        breakfast: 1.2,
        lunch: -0.2,
        snack: 0.0,
        dinner: 0.0,
    };
    assert!(matches!(
        allocation.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
}

#[test]
fn test_policy_serializes_snake_case() {
    let json = serde_json::to_string(&CategoryPolicy::RejectSlot).unwrap();
    assert_eq!(json, "\"reject_slot\"");
    assert_eq!(CategoryPolicy::KeepWithWarning.to_string(), "keep_with_warning");
}
