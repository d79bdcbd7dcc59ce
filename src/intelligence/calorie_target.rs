// ABOUTME: Daily calorie target from body metrics using Mifflin-St Jeor BMR and activity-based TDEE
// ABOUTME: Supplies the kcal/day number the composer sizes portions against
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Daily Calorie Target
//!
//! `target = max(round(BMR x activity factor +/- goal adjustment), minimum)`
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{ActivityFactorsConfig, BmrConfig, CalorieTargetConfig, GoalAdjustmentConfig};
use crate::errors::{AppError, AppResult};

/// Biological sex for the BMR constant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male constant (+5)
    Male,
    /// Female constant (-161)
    Female,
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(format!("unknown sex '{other}' (expected male or female)")),
        }
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// 1-3 days/week
    LightlyActive,
    /// 3-5 days/week
    ModeratelyActive,
    /// 6-7 days/week
    VeryActive,
    /// Hard training twice a day
    ExtraActive,
}

impl ActivityLevel {
    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::LightlyActive => "lightly_active",
            Self::ModeratelyActive => "moderately_active",
            Self::VeryActive => "very_active",
            Self::ExtraActive => "extra_active",
        }
    }

    const fn factor(self, config: &ActivityFactorsConfig) -> f64 {
        match self {
            Self::Sedentary => config.sedentary,
            Self::LightlyActive => config.lightly_active,
            Self::ModeratelyActive => config.moderately_active,
            Self::VeryActive => config.very_active,
            Self::ExtraActive => config.extra_active,
        }
    }
}

impl Display for ActivityLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "lightly_active" | "light" => Ok(Self::LightlyActive),
            "moderately_active" | "moderate" => Ok(Self::ModeratelyActive),
            "very_active" | "very" => Ok(Self::VeryActive),
            "extra_active" | "extra" => Ok(Self::ExtraActive),
            other => Err(format!("unknown activity level '{other}'")),
        }
    }
}

/// Weight goal driving the daily adjustment
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WeightGoal {
    /// Caloric deficit
    Lose,
    /// Caloric balance
    #[default]
    Maintain,
    /// Caloric surplus
    Gain,
}

impl FromStr for WeightGoal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lose" | "loss" => Ok(Self::Lose),
            "maintain" | "maintenance" => Ok(Self::Maintain),
            "gain" => Ok(Self::Gain),
            other => Err(format!(
                "unknown goal '{other}' (expected lose, maintain or gain)"
            )),
        }
    }
}

/// Body metrics feeding the calorie target
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ProfileMetrics {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age: u32,
    /// Sex for the BMR constant
    pub sex: Sex,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Weight goal
    #[serde(default)]
    pub goal: WeightGoal,
}

/// Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_constant`
///
/// # Errors
///
/// Returns `InvalidInput` if weight, height or age are outside the validated ranges
pub fn basal_metabolic_rate(profile: &ProfileMetrics, config: &BmrConfig) -> AppResult<f64> {
    if !(profile.weight_kg > 0.0 && profile.weight_kg <= 300.0) {
        return Err(AppError::invalid_input(
            "Weight must be between 0 and 300 kg",
        ));
    }
    if !(profile.height_cm > 0.0 && profile.height_cm <= 300.0) {
        return Err(AppError::invalid_input(
            "Height must be between 0 and 300 cm",
        ));
    }
    if !(10..=120).contains(&profile.age) {
        return Err(AppError::invalid_input(
            "Age must be between 10 and 120 years",
        ));
    }

    let sex_constant = match profile.sex {
        Sex::Male => config.msj_male_constant,
        Sex::Female => config.msj_female_constant,
    };

    Ok(config.msj_weight_coef * profile.weight_kg
        + config.msj_height_coef * profile.height_cm
        + config.msj_age_coef * f64::from(profile.age)
        + sex_constant)
}

/// Total Daily Energy Expenditure: BMR x activity factor
///
/// # Errors
///
/// Returns `InvalidInput` if `bmr` is not positive
pub fn daily_energy_expenditure(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> AppResult<f64> {
    if bmr.is_nan() || bmr <= 0.0 {
        return Err(AppError::invalid_input("BMR must be positive"));
    }
    Ok(bmr * activity_level.factor(config))
}

fn goal_adjustment(goal: WeightGoal, config: &GoalAdjustmentConfig) -> f64 {
    match goal {
        WeightGoal::Lose => -config.deficit_kcal,
        WeightGoal::Maintain => 0.0,
        WeightGoal::Gain => config.surplus_kcal,
    }
}

/// Daily calorie target in whole kcal, never below the configured minimum
///
/// # Errors
///
/// Returns `InvalidInput` for out-of-range profile metrics
pub fn daily_calorie_target(
    profile: &ProfileMetrics,
    config: &CalorieTargetConfig,
) -> AppResult<f64> {
    let bmr = basal_metabolic_rate(profile, &config.bmr)?;
    let tdee = daily_energy_expenditure(bmr, profile.activity_level, &config.activity_factors)?;
    let target = (tdee + goal_adjustment(profile.goal, &config.goal_adjustment))
        .round()
        .max(config.goal_adjustment.min_daily_kcal);

    debug!(
        bmr,
        tdee,
        target,
        activity_level = %profile.activity_level,
        "Daily calorie target computed"
    );
    Ok(target)
}
