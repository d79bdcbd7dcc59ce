// ABOUTME: Configuration for the daily calorie target helper
// ABOUTME: Mifflin-St Jeor coefficients, activity multipliers, and goal-based adjustments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::constants::nutrition::MIN_DAILY_CALORIE_TARGET;

/// Calorie target configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalorieTargetConfig {
    /// Basal metabolic rate formula coefficients
    pub bmr: BmrConfig,
    /// Activity multipliers applied to BMR
    pub activity_factors: ActivityFactorsConfig,
    /// Deficit / surplus applied on top of TDEE
    pub goal_adjustment: GoalAdjustmentConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub lightly_active: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderately_active: f64,
    /// Very active (6-7 days/week): 1.725
    pub very_active: f64,
    /// Extra active (hard training 2x/day): 1.9
    pub extra_active: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
            extra_active: 1.9,
        }
    }
}

impl ActivityFactorsConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let factors = [
            self.sedentary,
            self.lightly_active,
            self.moderately_active,
            self.very_active,
            self.extra_active,
        ];
        if factors.iter().any(|factor| !(1.0..=2.5).contains(factor)) {
            return Err(ConfigError::ValueOutOfRange(
                "activity factors must be between 1.0 and 2.5",
            ));
        }
        if factors.windows(2).any(|pair| pair[0] > pair[1]) {
            return Err(ConfigError::InvalidRange(
                "activity factors must not decrease with activity level",
            ));
        }
        Ok(())
    }
}

/// Calorie adjustments applied to TDEE per weight goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAdjustmentConfig {
    /// kcal removed per day for weight loss
    pub deficit_kcal: f64,
    /// kcal added per day for weight gain
    pub surplus_kcal: f64,
    /// Lowest daily target ever suggested
    pub min_daily_kcal: f64,
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            deficit_kcal: 500.0,
            surplus_kcal: 300.0,
            min_daily_kcal: MIN_DAILY_CALORIE_TARGET,
        }
    }
}

impl GoalAdjustmentConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1500.0).contains(&self.deficit_kcal) {
            return Err(ConfigError::ValueOutOfRange(
                "goal deficit must be between 0 and 1500 kcal",
            ));
        }
        if !(0.0..=1500.0).contains(&self.surplus_kcal) {
            return Err(ConfigError::ValueOutOfRange(
                "goal surplus must be between 0 and 1500 kcal",
            ));
        }
        if self.min_daily_kcal <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "minimum daily calorie target must be positive",
            ));
        }
        Ok(())
    }
}

impl CalorieTargetConfig {
    /// Validate activity factors and goal adjustments
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` describing the first invalid value
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.activity_factors.validate()?;
        self.goal_adjustment.validate()
    }
}
