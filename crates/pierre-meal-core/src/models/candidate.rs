// ABOUTME: Candidate grid of proposed recipe ids per day and slot, prior to validation
// ABOUTME: Strict shape checks and integer-id coercion from structured suggestion payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::plan::DayOfWeek;
use super::recipe::{MealSlot, RecipeId};
use crate::constants::plan::{DAYS_PER_WEEK, SLOTS_PER_DAY};
use crate::errors::PlanningError;

/// Proposed recipe ids for each of the 28 slots of a week
///
/// Rows are days (Monday first), columns are slots in [`MealSlot::ALL`] order.
/// `None` means the suggestion step proposed nothing for that slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateGrid {
    cells: [[Option<RecipeId>; SLOTS_PER_DAY]; DAYS_PER_WEEK],
}

impl CandidateGrid {
    /// Grid with nothing proposed
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from day rows, checking the 7x4 shape
    ///
    /// # Errors
    ///
    /// Returns `PlanningError::InvalidGridShape` unless there are exactly 7 rows of 4 cells
    pub fn from_rows(rows: Vec<Vec<Option<RecipeId>>>) -> Result<Self, PlanningError> {
        if rows.len() != DAYS_PER_WEEK {
            return Err(PlanningError::grid_shape(format!(
                "expected {DAYS_PER_WEEK} days, got {}",
                rows.len()
            )));
        }
        let mut grid = Self::empty();
        for (day, row) in DayOfWeek::ALL.into_iter().zip(rows) {
            if row.len() != SLOTS_PER_DAY {
                return Err(PlanningError::grid_shape(format!(
                    "expected {SLOTS_PER_DAY} slots on {day}, got {}",
                    row.len()
                )));
            }
            for (slot, cell) in MealSlot::ALL.into_iter().zip(row) {
                grid.set(day, slot, cell);
            }
        }
        Ok(grid)
    }

    /// Build from a structured suggestion payload
    ///
    /// Accepts either an object keyed by day name holding objects keyed by slot name,
    /// or an array of 7 arrays of 4. Missing slot keys and `null` mean "no proposal".
    ///
    /// # Errors
    ///
    /// Returns `InvalidGridShape` for a wrong shape and `MalformedSuggestionPayload`
    /// when a slot value is not coercible to an integer id
    pub fn from_json(value: &Value) -> Result<Self, PlanningError> {
        match value {
            Value::Object(days) => Self::from_day_map(days),
            Value::Array(rows) => Self::from_day_rows(rows),
            other => Err(PlanningError::grid_shape(format!(
                "expected an object or array of days, got {}",
                json_kind(other)
            ))),
        }
    }

    fn from_day_map(days: &Map<String, Value>) -> Result<Self, PlanningError> {
        let mut grid = Self::empty();
        for day in DayOfWeek::ALL {
            let slots = find_key(days, day.as_str())
                .ok_or_else(|| PlanningError::grid_shape(format!("missing day '{day}'")))?;
            let Value::Object(slots) = slots else {
                return Err(PlanningError::grid_shape(format!(
                    "day '{day}' must be an object of slots, got {}",
                    json_kind(slots)
                )));
            };
            for slot in MealSlot::ALL {
                let cell = match find_key(slots, slot.as_str()) {
                    Some(raw) => coerce_recipe_id(raw, day, slot)?,
                    None => None,
                };
                grid.set(day, slot, cell);
            }
        }
        Ok(grid)
    }

    fn from_day_rows(rows: &[Value]) -> Result<Self, PlanningError> {
        if rows.len() != DAYS_PER_WEEK {
            return Err(PlanningError::grid_shape(format!(
                "expected {DAYS_PER_WEEK} days, got {}",
                rows.len()
            )));
        }
        let mut grid = Self::empty();
        for (day, row) in DayOfWeek::ALL.into_iter().zip(rows) {
            let Value::Array(cells) = row else {
                return Err(PlanningError::grid_shape(format!(
                    "day '{day}' must be an array of slots, got {}",
                    json_kind(row)
                )));
            };
            if cells.len() != SLOTS_PER_DAY {
                return Err(PlanningError::grid_shape(format!(
                    "expected {SLOTS_PER_DAY} slots on {day}, got {}",
                    cells.len()
                )));
            }
            for (slot, raw) in MealSlot::ALL.into_iter().zip(cells) {
                grid.set(day, slot, coerce_recipe_id(raw, day, slot)?);
            }
        }
        Ok(grid)
    }

    /// Proposed id at `day` / `slot`
    #[must_use]
    pub const fn get(&self, day: DayOfWeek, slot: MealSlot) -> Option<RecipeId> {
        self.cells[day_index(day)][slot.index()]
    }

    /// Set the proposal at `day` / `slot`
    pub fn set(&mut self, day: DayOfWeek, slot: MealSlot, recipe_id: Option<RecipeId>) {
        self.cells[day_index(day)][slot.index()] = recipe_id;
    }

    /// All 28 cells, Monday breakfast first
    pub fn cells(&self) -> impl Iterator<Item = (DayOfWeek, MealSlot, Option<RecipeId>)> + '_ {
        DayOfWeek::ALL.into_iter().flat_map(move |day| {
            MealSlot::ALL
                .into_iter()
                .map(move |slot| (day, slot, self.get(day, slot)))
        })
    }
}

const fn day_index(day: DayOfWeek) -> usize {
    match day {
        DayOfWeek::Monday => 0,
        DayOfWeek::Tuesday => 1,
        DayOfWeek::Wednesday => 2,
        DayOfWeek::Thursday => 3,
        DayOfWeek::Friday => 4,
        DayOfWeek::Saturday => 5,
        DayOfWeek::Sunday => 6,
    }
}

/// Case-insensitive key lookup; model output capitalizes day names freely
fn find_key<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    map.get(key).or_else(|| {
        map.iter()
            .find(|(candidate, _)| candidate.trim().eq_ignore_ascii_case(key))
            .map(|(_, value)| value)
    })
}

fn coerce_recipe_id(
    raw: &Value,
    day: DayOfWeek,
    slot: MealSlot,
) -> Result<Option<RecipeId>, PlanningError> {
    let location = || format!("{day}.{slot}");
    match raw {
        Value::Null => Ok(None),
        Value::Number(number) => {
            if let Some(id) = number.as_u64() {
                return Ok(Some(RecipeId(id)));
            }
            match number.as_f64() {
                Some(float) if is_integral_id(float) => Ok(Some(RecipeId(float as u64))),
                _ => Err(PlanningError::malformed(
                    location(),
                    format!("{number} is not a non-negative integer id"),
                )),
            }
        }
        Value::String(text) => {
            let trimmed = text.trim();
            if let Ok(id) = trimmed.parse::<u64>() {
                return Ok(Some(RecipeId(id)));
            }
            match trimmed.parse::<f64>() {
                Ok(float) if is_integral_id(float) => Ok(Some(RecipeId(float as u64))),
                _ => Err(PlanningError::malformed(
                    location(),
                    format!("'{text}' is not coercible to an integer id"),
                )),
            }
        }
        other => Err(PlanningError::malformed(
            location(),
            format!("expected an integer id, got {}", json_kind(other)),
        )),
    }
}

fn is_integral_id(value: f64) -> bool {
    value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
