// ABOUTME: Unified error handling re-exported from the pierre-meal-core foundation crate
// ABOUTME: Gives binaries and tests a single `pierre_meal_planner::errors` path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! All error types live in `pierre-meal-core`; this module re-exports them.

pub use pierre_meal_core::errors::{AppError, AppResult, ErrorCode, PlanningError};
