// ABOUTME: Recipe catalog lookup boundary and an in-memory implementation backed by a BTreeMap
// ABOUTME: Lookups return owned snapshots; updates are explicit collaborator operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Catalog
//!
//! The planning engine only ever pulls recipes through [`RecipeCatalog`]. It never
//! holds a subscription: callers that want fresh data simply call again.

use std::collections::BTreeMap;
use std::fs;
use std::mem;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};

use crate::errors::{AppError, AppResult};
use crate::models::{MealSlot, Recipe, RecipeId};

/// Read-only recipe lookup used by the planning engine
///
/// Implementations must be `Send + Sync` so batch operations can run on the rayon pool.
pub trait RecipeCatalog: Send + Sync {
    /// Recipe with `id`, if it exists
    fn get_by_id(&self, id: RecipeId) -> Option<Recipe>;

    /// Every recipe categorized for `slot`
    fn get_by_category(&self, slot: MealSlot) -> Vec<Recipe>;
}

/// Recipe catalog held in memory, ordered by id
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecipeCatalog {
    recipes: BTreeMap<RecipeId, Recipe>,
}

impl InMemoryRecipeCatalog {
    /// Empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from recipes, validating each one
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a recipe that breaks an invariant and
    /// `ResourceAlreadyExists` for a duplicate id
    pub fn from_recipes(recipes: impl IntoIterator<Item = Recipe>) -> AppResult<Self> {
        let mut catalog = Self::new();
        for recipe in recipes {
            catalog.insert(recipe)?;
        }
        info!(recipe_count = catalog.len(), "Recipe catalog loaded");
        Ok(catalog)
    }

    /// Parse a catalog from JSON: either an array of recipes or `{ "recipes": [...] }`
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` for malformed JSON, plus any `from_recipes` error
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let recipes: Vec<Recipe> = match serde_json::from_str(json)? {
            Value::Object(mut document) => {
                let list = document.remove("recipes").ok_or_else(|| {
                    AppError::invalid_format("catalog object must contain a \"recipes\" array")
                })?;
                serde_json::from_value(list)?
            }
            other => serde_json::from_value(other)?,
        };
        Self::from_recipes(recipes)
    }

    /// Read and parse a catalog file
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the file cannot be read, plus any `from_json_str` error
    pub fn from_json_file(path: &Path) -> AppResult<Self> {
        debug!(path = %path.display(), "Reading recipe catalog");
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Add a new recipe
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an invalid recipe and `ResourceAlreadyExists` if the id is taken
    pub fn insert(&mut self, recipe: Recipe) -> AppResult<()> {
        recipe.validate()?;
        if self.recipes.contains_key(&recipe.id) {
            return Err(AppError::already_exists(format!("Recipe {}", recipe.id)));
        }
        self.recipes.insert(recipe.id, recipe);
        Ok(())
    }

    /// Replace an existing recipe, returning the previous version
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an invalid recipe and `ResourceNotFound` if the id is unknown
    pub fn update(&mut self, recipe: Recipe) -> AppResult<Recipe> {
        recipe.validate()?;
        let slot = self
            .recipes
            .get_mut(&recipe.id)
            .ok_or_else(|| AppError::not_found(format!("Recipe {}", recipe.id)))?;
        Ok(mem::replace(slot, recipe))
    }

    /// Remove a recipe; plans that reference it degrade to unassigned on read
    pub fn remove(&mut self, id: RecipeId) -> Option<Recipe> {
        self.recipes.remove(&id)
    }

    /// Number of recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the catalog holds no recipes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// All recipes in id order
    pub fn recipes(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.values()
    }
}

impl RecipeCatalog for InMemoryRecipeCatalog {
    fn get_by_id(&self, id: RecipeId) -> Option<Recipe> {
        self.recipes.get(&id).cloned()
    }

    fn get_by_category(&self, slot: MealSlot) -> Vec<Recipe> {
        self.recipes
            .values()
            .filter(|recipe| recipe.has_category(slot))
            .cloned()
            .collect()
    }
}
