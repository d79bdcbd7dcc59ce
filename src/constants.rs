// ABOUTME: Application constants re-exported from the pierre-meal-core foundation crate
// ABOUTME: Plan geometry, rounding precision, and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module

pub use pierre_meal_core::constants::{
    env_config, nutrition, plan, rounding, service_names, shopping,
};
