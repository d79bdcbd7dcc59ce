// ABOUTME: Planning engine configuration: slot allocation, category policy, and scaling precision
// ABOUTME: Loaded once from defaults plus environment overrides and validated before use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::calorie_target::CalorieTargetConfig;
use super::ConfigError;
use crate::constants::env_config;
use crate::constants::rounding::{INGREDIENT_DECIMAL_PLACES, MAX_DECIMAL_PLACES};
use crate::models::MealSlot;

/// Allowed deviation of the allocation sum from 1.0
const ALLOCATION_SUM_TOLERANCE: f64 = 1e-6;

/// Global configuration singleton
static PLANNING_CONFIG: OnceLock<PlanningConfig> = OnceLock::new();

/// Share of the daily calorie target assigned to each meal slot
///
/// Defaults: breakfast 30%, lunch 40%, snack 10%, dinner 20%.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotAllocationConfig {
    /// Breakfast share (0.0-1.0)
    pub breakfast: f64,
    /// Lunch share (0.0-1.0)
    pub lunch: f64,
    /// Snack share (0.0-1.0)
    pub snack: f64,
    /// Dinner share (0.0-1.0)
    pub dinner: f64,
}

impl Default for SlotAllocationConfig {
    fn default() -> Self {
        Self {
            breakfast: 0.30,
            lunch: 0.40,
            snack: 0.10,
            dinner: 0.20,
        }
    }
}

impl SlotAllocationConfig {
    /// Share of the daily target for `slot`
    #[must_use]
    pub const fn share(&self, slot: MealSlot) -> f64 {
        match slot {
            MealSlot::Breakfast => self.breakfast,
            MealSlot::Lunch => self.lunch,
            MealSlot::Snack => self.snack,
            MealSlot::Dinner => self.dinner,
        }
    }

    /// Validate that every share is within 0.0-1.0 and that they sum to 1.0
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for an out-of-range share and
    /// `ConfigError::InvalidWeights` when the shares do not sum to 1.0
    pub fn validate(&self) -> Result<(), ConfigError> {
        for slot in MealSlot::ALL {
            let value = self.share(slot);
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ValueOutOfRange(Box::leak(
                    format!("{slot} allocation must be between 0.0 and 1.0, got {value}")
                        .into_boxed_str(),
                )));
            }
        }

        let total: f64 = MealSlot::ALL.iter().map(|slot| self.share(*slot)).sum();
        if (total - 1.0).abs() > ALLOCATION_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights(
                "slot allocations must sum to 1.0",
            ));
        }
        Ok(())
    }
}

/// What the composer does with a recipe proposed for a slot it is not categorized for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryPolicy {
    /// Record a warning and keep the sized assignment
    #[default]
    KeepWithWarning,
    /// Record a warning and leave the slot unassigned
    RejectSlot,
}

impl CategoryPolicy {
    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::KeepWithWarning => "keep_with_warning",
            Self::RejectSlot => "reject_slot",
        }
    }
}

impl Display for CategoryPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "keep" | "keep_with_warning" => Ok(Self::KeepWithWarning),
            "reject" | "reject_slot" => Ok(Self::RejectSlot),
            other => Err(format!(
                "unknown category policy '{other}' (expected keep or reject)"
            )),
        }
    }
}

/// Ingredient scaling precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalingConfig {
    /// Decimal places kept on scaled quantities
    pub decimal_places: u32,
}

impl Default for ScalingConfig {
    fn default() -> Self {
        Self {
            decimal_places: INGREDIENT_DECIMAL_PLACES,
        }
    }
}

/// Main planning configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanningConfig {
    /// Per-slot share of the daily calorie target
    pub slot_allocation: SlotAllocationConfig,
    /// Handling of category mismatches during composition
    pub category_policy: CategoryPolicy,
    /// Ingredient scaling precision
    pub scaling: ScalingConfig,
    /// Daily calorie target helper parameters
    pub calorie_target: CalorieTargetConfig,
}

impl PlanningConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        PLANNING_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load planning config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(
            category_policy = %config.category_policy,
            scale_decimals = config.scaling.decimal_places,
            "Planning configuration loaded"
        );
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` describing the first invalid setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.slot_allocation.validate()?;

        if self.scaling.decimal_places > MAX_DECIMAL_PLACES {
            return Err(ConfigError::ValueOutOfRange(
                "scaling decimal places must be at most 6",
            ));
        }

        self.calorie_target.validate()
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Slot allocation
        Self::apply_env_var(
            env_config::ALLOCATION_BREAKFAST,
            &mut self.slot_allocation.breakfast,
        )?;
        Self::apply_env_var(env_config::ALLOCATION_LUNCH, &mut self.slot_allocation.lunch)?;
        Self::apply_env_var(env_config::ALLOCATION_SNACK, &mut self.slot_allocation.snack)?;
        Self::apply_env_var(
            env_config::ALLOCATION_DINNER,
            &mut self.slot_allocation.dinner,
        )?;

        // Composition policy
        Self::apply_env_var(env_config::CATEGORY_POLICY, &mut self.category_policy)?;

        // Scaling precision
        Self::apply_env_var(
            env_config::SCALE_DECIMALS,
            &mut self.scaling.decimal_places,
        )?;

        // Goal adjustments
        Self::apply_env_var(
            env_config::GOAL_DEFICIT_KCAL,
            &mut self.calorie_target.goal_adjustment.deficit_kcal,
        )?;
        Self::apply_env_var(
            env_config::GOAL_SURPLUS_KCAL,
            &mut self.calorie_target.goal_adjustment.surplus_kcal,
        )?;

        Ok(self)
    }
}
