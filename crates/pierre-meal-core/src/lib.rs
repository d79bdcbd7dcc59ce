// ABOUTME: Core types and constants for the Pierre meal planner
// ABOUTME: Foundation crate with the week plan data model, error handling, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Meal Core
//!
//! Foundation crate providing shared types for meal-plan composition and
//! nutrition aggregation. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `PlanningError`
//! - **constants**: Plan geometry, rounding precision, and environment variable names
//! - **models**: Recipes, week plans, candidate grids, nutrition facts, shopping lines

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Recipe, `WeekPlan`, `CandidateGrid`, `NutritionFacts`, etc.)
pub mod models;
