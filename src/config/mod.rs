// ABOUTME: Configuration management module for the meal planner
// ABOUTME: Environment-only configuration with validation and a process-wide cached instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the Pierre meal planner
//!
//! Configuration is environment-only: defaults are overridden by `MEAL_PLAN_*`
//! variables and validated once. Use [`PlanningConfig::global`] for the cached
//! process-wide instance or [`PlanningConfig::load`] to re-read the environment.
//!
//! - **planning**: slot allocation, category policy, scaling precision
//! - **`calorie_target`**: BMR / TDEE coefficients and goal adjustments

/// Daily calorie target helper configuration
pub mod calorie_target;
/// Configuration error types
pub mod error;
/// Planning engine configuration
pub mod planning;

pub use calorie_target::{
    ActivityFactorsConfig, BmrConfig, CalorieTargetConfig, GoalAdjustmentConfig,
};
pub use error::ConfigError;
pub use planning::{CategoryPolicy, PlanningConfig, ScalingConfig, SlotAllocationConfig};
