// ABOUTME: Week plan data model: 7 named days of 4 meal slots, each holding a MealEntry
// ABOUTME: Defines DayOfWeek, MealEntry, DayMeals, WeekPlan, and the SavedWeekPlan record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use super::recipe::{MealSlot, RecipeId};
use crate::errors::PlanningError;

/// Named day of a week plan
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DayOfWeek {
    /// Monday
    Monday,
    /// Tuesday
    Tuesday,
    /// Wednesday
    Wednesday,
    /// Thursday
    Thursday,
    /// Friday
    Friday,
    /// Saturday
    Saturday,
    /// Sunday
    Sunday,
}

impl DayOfWeek {
    /// All days, Monday first
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Lowercase wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }
}

impl Display for DayOfWeek {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayOfWeek {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|day| day.as_str() == normalized)
            .ok_or_else(|| format!("unknown day '{normalized}'"))
    }
}

#[derive(Deserialize)]
struct RawMealEntry {
    #[serde(default)]
    recipe_id: Option<RecipeId>,
    #[serde(default)]
    quantity: f64,
}

/// Recipe reference plus gram quantity for one slot
///
/// An entry without a recipe always has quantity 0. A recipe with quantity 0 is
/// allowed and means "planned but sized to none".
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MealEntry {
    recipe_id: Option<RecipeId>,
    quantity: f64,
}

impl MealEntry {
    /// The canonical unassigned entry
    #[must_use]
    pub const fn unassigned() -> Self {
        Self {
            recipe_id: None,
            quantity: 0.0,
        }
    }

    /// Entry for `recipe_id` sized to `quantity` grams
    ///
    /// # Errors
    ///
    /// Returns `PlanningError::NegativeQuantity` if `quantity` is negative or not finite
    pub fn assigned(recipe_id: RecipeId, quantity: f64) -> Result<Self, PlanningError> {
        Self::new(Some(recipe_id), quantity)
    }

    /// Build an entry, forcing quantity 0 when no recipe is given
    ///
    /// # Errors
    ///
    /// Returns `PlanningError::NegativeQuantity` if `quantity` is negative or not finite
    pub fn new(recipe_id: Option<RecipeId>, quantity: f64) -> Result<Self, PlanningError> {
        if !quantity.is_finite() || quantity < 0.0 {
            return Err(PlanningError::NegativeQuantity { quantity });
        }
        Ok(recipe_id.map_or_else(Self::unassigned, |id| Self {
            recipe_id: Some(id),
            quantity,
        }))
    }

    /// Referenced recipe, if any
    #[must_use]
    pub const fn recipe_id(&self) -> Option<RecipeId> {
        self.recipe_id
    }

    /// Quantity in grams
    #[must_use]
    pub const fn quantity(&self) -> f64 {
        self.quantity
    }

    /// Whether a recipe is assigned
    #[must_use]
    pub const fn is_assigned(&self) -> bool {
        self.recipe_id.is_some()
    }
}

impl Default for MealEntry {
    fn default() -> Self {
        Self::unassigned()
    }
}

impl<'de> Deserialize<'de> for MealEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawMealEntry::deserialize(deserializer)?;
        Self::new(raw.recipe_id, raw.quantity).map_err(DeError::custom)
    }
}

/// The four meal entries of one day
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DayMeals {
    /// Breakfast slot
    pub breakfast: MealEntry,
    /// Lunch slot
    pub lunch: MealEntry,
    /// Snack slot
    pub snack: MealEntry,
    /// Dinner slot
    pub dinner: MealEntry,
}

impl DayMeals {
    /// Entry for `slot`
    #[must_use]
    pub const fn get(&self, slot: MealSlot) -> &MealEntry {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Snack => &self.snack,
            MealSlot::Dinner => &self.dinner,
        }
    }

    /// Replace the entry for `slot`
    pub fn set(&mut self, slot: MealSlot, entry: MealEntry) {
        let target = match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Snack => &mut self.snack,
            MealSlot::Dinner => &mut self.dinner,
        };
        *target = entry;
    }

    /// Entries in display order
    pub fn iter(&self) -> impl Iterator<Item = (MealSlot, &MealEntry)> + '_ {
        MealSlot::ALL.into_iter().map(move |slot| (slot, self.get(slot)))
    }
}

/// Complete 7x4 grid of meal entries
///
/// Every day and slot always exists; a fresh plan has all 28 entries unassigned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeekPlan {
    /// Monday meals
    pub monday: DayMeals,
    /// Tuesday meals
    pub tuesday: DayMeals,
    /// Wednesday meals
    pub wednesday: DayMeals,
    /// Thursday meals
    pub thursday: DayMeals,
    /// Friday meals
    pub friday: DayMeals,
    /// Saturday meals
    pub saturday: DayMeals,
    /// Sunday meals
    pub sunday: DayMeals,
}

impl WeekPlan {
    /// Empty plan with every entry unassigned
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Meals for `day`
    #[must_use]
    pub const fn day(&self, day: DayOfWeek) -> &DayMeals {
        match day {
            DayOfWeek::Monday => &self.monday,
            DayOfWeek::Tuesday => &self.tuesday,
            DayOfWeek::Wednesday => &self.wednesday,
            DayOfWeek::Thursday => &self.thursday,
            DayOfWeek::Friday => &self.friday,
            DayOfWeek::Saturday => &self.saturday,
            DayOfWeek::Sunday => &self.sunday,
        }
    }

    /// Mutable meals for `day`
    pub fn day_mut(&mut self, day: DayOfWeek) -> &mut DayMeals {
        match day {
            DayOfWeek::Monday => &mut self.monday,
            DayOfWeek::Tuesday => &mut self.tuesday,
            DayOfWeek::Wednesday => &mut self.wednesday,
            DayOfWeek::Thursday => &mut self.thursday,
            DayOfWeek::Friday => &mut self.friday,
            DayOfWeek::Saturday => &mut self.saturday,
            DayOfWeek::Sunday => &mut self.sunday,
        }
    }

    /// Entry at `day` / `slot`
    #[must_use]
    pub const fn entry(&self, day: DayOfWeek, slot: MealSlot) -> &MealEntry {
        self.day(day).get(slot)
    }

    /// Replace the entry at `day` / `slot`
    pub fn set_entry(&mut self, day: DayOfWeek, slot: MealSlot, entry: MealEntry) {
        self.day_mut(day).set(slot, entry);
    }

    /// All 28 entries, Monday breakfast first
    pub fn entries(&self) -> impl Iterator<Item = (DayOfWeek, MealSlot, &MealEntry)> + '_ {
        DayOfWeek::ALL
            .into_iter()
            .flat_map(move |day| self.day(day).iter().map(move |(slot, entry)| (day, slot, entry)))
    }

    /// Number of entries with a recipe assigned
    #[must_use]
    pub fn assigned_count(&self) -> usize {
        self.entries().filter(|(_, _, entry)| entry.is_assigned()).count()
    }
}

/// Week plan as exchanged with the persistence collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedWeekPlan {
    /// User-facing plan name
    pub name: String,
    /// The plan itself
    pub meals: WeekPlan,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl SavedWeekPlan {
    /// Wrap `meals` in a new record stamped with the current time
    #[must_use]
    pub fn new(name: impl Into<String>, meals: WeekPlan) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            meals,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the plan wholesale; there is no field-level merge
    pub fn replace_meals(&mut self, meals: WeekPlan) {
        self.meals = meals;
        self.updated_at = Utc::now();
    }
}
