// ABOUTME: Derived nutrition totals for a meal, a day, and a whole week plan
// ABOUTME: NutritionFacts supports summation so aggregates can be built from raw values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use super::plan::DayOfWeek;

/// Absolute nutrition amounts for some quantity of food
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionFacts {
    /// Energy in kcal
    pub calories: f64,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbohydrates: f64,
    /// Fat in grams
    pub fat: f64,
    /// Fiber in grams
    pub fiber: f64,
}

impl NutritionFacts {
    /// All-zero totals
    pub const ZERO: Self = Self {
        calories: 0.0,
        protein: 0.0,
        carbohydrates: 0.0,
        fat: 0.0,
        fiber: 0.0,
    };

    /// Apply `f` to every field
    #[must_use]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            calories: f(self.calories),
            protein: f(self.protein),
            carbohydrates: f(self.carbohydrates),
            fat: f(self.fat),
            fiber: f(self.fiber),
        }
    }

    /// Whether every field is exactly zero
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl Add for NutritionFacts {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbohydrates: self.carbohydrates + rhs.carbohydrates,
            fat: self.fat + rhs.fat,
            fiber: self.fiber + rhs.fiber,
        }
    }
}

impl AddAssign for NutritionFacts {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for NutritionFacts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// Totals for one day of a plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyNutrition {
    /// Day the totals belong to
    pub day: DayOfWeek,
    /// Sum of the day's assigned meals
    pub totals: NutritionFacts,
}

/// Week total plus the per-day breakdown, Monday first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyNutrition {
    /// Sum over all seven days
    pub total: NutritionFacts,
    /// One record per day
    pub daily: Vec<DailyNutrition>,
}

impl WeeklyNutrition {
    /// Totals for `day`, if present in the breakdown
    #[must_use]
    pub fn day(&self, day: DayOfWeek) -> Option<&NutritionFacts> {
        self.daily
            .iter()
            .find(|record| record.day == day)
            .map(|record| &record.totals)
    }
}
