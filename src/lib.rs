// ABOUTME: Main library entry point for the Pierre meal planner
// ABOUTME: Week-plan composition, portion sizing, ingredient scaling, and nutrition aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Meal Planner
//!
//! Pure computation layer that turns a proposed set of recipes into a quantified
//! seven-day meal plan, and derives nutrition totals and a shopping list from it.
//!
//! ## Features
//!
//! - **Plan composition**: validate and size a 7x4 candidate grid against a daily calorie target
//! - **Portion sizing**: fixed per-slot allocation of the daily target, converted to grams
//! - **Ingredient scaling**: linear scaling of ingredient lists to any serving size
//! - **Shopping lists**: case-insensitive, unit-aware merging across recipes
//! - **Nutrition totals**: per meal, per day, and per week
//!
//! ## Architecture
//!
//! - **catalog**: `RecipeCatalog` lookup boundary and an in-memory implementation
//! - **intelligence**: the planning engine itself
//! - **providers**: suggestion provider boundary (LLM output to `CandidateGrid`)
//! - **services**: orchestration of providers, catalog, and engine
//! - **config** / **logging**: environment-driven configuration and tracing setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pierre_meal_planner::catalog::InMemoryRecipeCatalog;
//! use pierre_meal_planner::config::PlanningConfig;
//! use pierre_meal_planner::errors::AppResult;
//! use pierre_meal_planner::intelligence::WeeklyPlanComposer;
//! use pierre_meal_planner::models::CandidateGrid;
//!
//! fn main() -> AppResult<()> {
//!     let catalog = InMemoryRecipeCatalog::from_json_str("[]")?;
//!     let composer = WeeklyPlanComposer::new(PlanningConfig::global());
//!     let composition = composer.compose(&CandidateGrid::empty(), &catalog, 2000.0)?;
//!     println!("{} warnings", composition.warnings.len());
//!     Ok(())
//! }
//! ```

/// Recipe catalog boundary and in-memory implementation
pub mod catalog;

/// Environment-driven planning configuration
pub mod config;

/// Application constants (re-exported from `pierre-meal-core`)
pub mod constants;

/// Unified error handling (re-exported from `pierre-meal-core`)
pub mod errors;

/// Planning engine: validation, sizing, scaling, aggregation, composition
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Core data models (re-exported from `pierre-meal-core`)
pub mod models;

/// Suggestion provider boundary
pub mod providers;

/// High-level planning services
pub mod services;
