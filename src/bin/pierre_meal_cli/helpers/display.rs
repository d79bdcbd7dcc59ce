// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Human-readable summaries for pierre-meal-cli
// ABOUTME: Written to stderr so stdout stays machine-readable JSON

use pierre_meal_planner::intelligence::{Composition, WarningKind};

/// Summarize a composition and list its warnings
pub fn display_composition_summary(composition: &Composition) {
    eprintln!("{}", "=".repeat(60));
    eprintln!(
        "Week plan composed: {} of 28 slots assigned",
        composition.plan.assigned_count()
    );

    if composition.warnings.is_empty() {
        eprintln!("No warnings");
    } else {
        eprintln!(
            "{} warnings ({} missing, {} category, {} zero density):",
            composition.warnings.len(),
            composition.warnings_of(WarningKind::MissingRecipe).count(),
            composition.warnings_of(WarningKind::CategoryMismatch).count(),
            composition
                .warnings_of(WarningKind::ZeroCalorieDensity)
                .count()
        );
        for warning in &composition.warnings {
            eprintln!("  - {warning}");
        }
    }
    eprintln!("{}", "=".repeat(60));
}
