// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for pierre-meal-cli
// ABOUTME: Provides access to compose, plan, and calorie target commands

pub mod compose;
pub mod plan;
pub mod target;
