// ABOUTME: Suggestion provider boundary that supplies candidate grids to the plan composer
// ABOUTME: Defines the request sent to providers and the async provider and text completion traits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Suggestion Providers
//!
//! A provider turns a [`SuggestionRequest`] into a [`CandidateGrid`]. All leniency
//! about model output (code fences, prose around the JSON, trailing commas) lives
//! in this module; the composer only ever sees a typed grid.
//!
//! - [`FixedSuggestionProvider`]: returns a prepared grid (manual planning, tests)
//! - [`TextSuggestionProvider`]: prompts a [`TextCompletion`] backend and parses its reply

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::catalog::RecipeCatalog;
use crate::errors::AppResult;
use crate::models::{CandidateGrid, MealSlot, RecipeId};

mod fixed;
mod prompt;
mod text;

pub use fixed::FixedSuggestionProvider;
pub use prompt::build_week_prompt;
pub use text::{parse_suggestion_payload, StaticCompletion, TextSuggestionProvider};

/// A recipe a provider may pick for a slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotOption {
    /// Catalog id
    pub id: RecipeId,
    /// Display name
    pub name: String,
}

/// Everything a provider needs to propose a week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionRequest {
    /// Daily calorie target the plan will be sized against
    pub daily_calorie_target: f64,
    /// Legal recipes per slot, in id order
    pub options: BTreeMap<MealSlot, Vec<SlotOption>>,
}

impl SuggestionRequest {
    /// Build a request listing every catalog recipe under each slot it is categorized for
    pub fn from_catalog<C>(catalog: &C, daily_calorie_target: f64) -> Self
    where
        C: RecipeCatalog + ?Sized,
    {
        let options = MealSlot::ALL
            .into_iter()
            .map(|slot| {
                let choices = catalog
                    .get_by_category(slot)
                    .into_iter()
                    .map(|recipe| SlotOption {
                        id: recipe.id,
                        name: recipe.name,
                    })
                    .collect();
                (slot, choices)
            })
            .collect();

        Self {
            daily_calorie_target,
            options,
        }
    }

    /// Options for `slot`
    #[must_use]
    pub fn options_for(&self, slot: MealSlot) -> &[SlotOption] {
        self.options.get(&slot).map_or(&[], Vec::as_slice)
    }
}

/// Source of candidate grids for composition
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    /// Provider name for logging
    fn name(&self) -> &'static str;

    /// Propose a recipe id (or nothing) for every day/slot of a week
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or its output cannot be turned into a grid
    async fn suggest_week(&self, request: &SuggestionRequest) -> AppResult<CandidateGrid>;
}

/// Raw text generation backend, such as an LLM chat endpoint
#[async_trait]
pub trait TextCompletion: Send + Sync {
    /// Generate a reply to `prompt`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend call fails
    async fn complete(&self, prompt: &str) -> AppResult<String>;
}
