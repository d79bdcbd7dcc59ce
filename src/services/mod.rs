// ABOUTME: Service layer composing providers, the recipe catalog and the planning engine
// ABOUTME: Entry points used by the CLI and by embedding applications
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Planning services
//!
//! These functions wire collaborators together. They hold no state: plans,
//! catalogs and configuration are passed in and results are returned.

/// Week planning, shopping list and nutrition orchestration
pub mod planning;

pub use planning::{
    nutrition_for_plan, plan_week, shopping_list_for_plan, shopping_list_entries,
    ShoppingListOptions,
};
