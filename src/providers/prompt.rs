// ABOUTME: Renders the week planning prompt sent to text completion backends
// ABOUTME: Template is loaded at compile time and filled with the calorie target and slot options
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::Write;

use super::SuggestionRequest;
use crate::models::MealSlot;

/// Week planning prompt template
pub const WEEK_PLAN_PROMPT: &str = include_str!("week_plan_prompt.md");

/// Render the week planning prompt for `request`
#[must_use]
pub fn build_week_prompt(request: &SuggestionRequest) -> String {
    let mut options = String::new();
    for slot in MealSlot::ALL {
        let _ = writeln!(options, "{slot}:");
        let choices = request.options_for(slot);
        if choices.is_empty() {
            options.push_str("  (none)\n");
        }
        for choice in choices {
            let _ = writeln!(options, "  {}: {}", choice.id, choice.name);
        }
    }

    WEEK_PLAN_PROMPT
        .replace(
            "{{daily_calorie_target}}",
            &format!("{:.0}", request.daily_calorie_target),
        )
        .replace("{{options}}", options.trim_end())
}
