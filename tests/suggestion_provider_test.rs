// ABOUTME: Integration tests for suggestion providers and lenient model output parsing
// ABOUTME: Covers fenced and prose-wrapped JSON, trailing commas, strict id coercion and plan_week
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use async_trait::async_trait;
use common::{
    fixture_catalog, full_grid, init_test_logging, APPLE_YOGURT, CHICKEN_SALAD, LENTIL_SOUP,
    OATMEAL,
};
use pierre_meal_planner::{
    config::PlanningConfig,
    errors::{AppError, AppResult, ErrorCode, PlanningError},
    intelligence::{WarningKind, WeeklyPlanComposer},
    models::{DayOfWeek, MealSlot, RecipeId},
    providers::{
        build_week_prompt, parse_suggestion_payload, FixedSuggestionProvider, StaticCompletion,
        SuggestionProvider, SuggestionRequest, TextCompletion, TextSuggestionProvider,
    },
    services::plan_week,
};

const WEEK_JSON: &str = r#"{
  "monday":    { "breakfast": 1, "lunch": 2, "snack": 3, "dinner": 4 },
  "tuesday":   { "breakfast": 1, "lunch": 2, "snack": 3, "dinner": 4 },
  "wednesday": { "breakfast": 1, "lunch": 2, "snack": 3, "dinner": 4 },
  "thursday":  { "breakfast": 1, "lunch": 2, "snack": 3, "dinner": 4 },
  "friday":    { "breakfast": 1, "lunch": 2, "snack": 3, "dinner": 4 },
  "saturday":  { "breakfast": 1, "lunch": 2, "snack": 3, "dinner": 4 },
  "sunday":    { "breakfast": 1, "lunch": 2, "snack": 3, "dinner": 4 }
}"#;

// ============================================================================
// PAYLOAD PARSING
// ============================================================================

#[test]
fn test_plain_json_parses_to_full_grid() {
    assert_eq!(parse_suggestion_payload(WEEK_JSON).unwrap(), full_grid());
}

#[test]
fn test_fenced_json_with_prose_parses() {
    let reply = format!("Here is your plan:\n\n```json\n{WEEK_JSON}\n```\n\nEnjoy your week!");
    assert_eq!(parse_suggestion_payload(&reply).unwrap(), full_grid());
}

#[test]
fn test_unfenced_json_inside_prose_parses() {
    let reply = format!("Sure thing! {WEEK_JSON} Let me know if you want changes.");
    assert_eq!(parse_suggestion_payload(&reply).unwrap(), full_grid());
}

#[test]
fn test_trailing_commas_are_tolerated() {
    let sloppy = WEEK_JSON
        .replace("\"dinner\": 4 }", "\"dinner\": 4, }")
        .replace("}\n}", "},\n}");
    assert_eq!(parse_suggestion_payload(&sloppy).unwrap(), full_grid());
}

#[test]
fn test_wrapped_week_object_parses() {
    let wrapped = format!("{{\"week\": {WEEK_JSON}}}");
    assert_eq!(parse_suggestion_payload(&wrapped).unwrap(), full_grid());
}

#[test]
fn test_array_form_and_absent_cells() {
    let rows = r#"[
        [1, "2", null, 4.0],
        [null, null, null, null],
        [null, null, null, null],
        [null, null, null, null],
        [null, null, null, null],
        [null, null, null, null],
        [null, null, null, null]
    ]"#;
    let grid = parse_suggestion_payload(rows).unwrap();
    assert_eq!(grid.get(DayOfWeek::Monday, MealSlot::Breakfast), Some(OATMEAL));
    assert_eq!(grid.get(DayOfWeek::Monday, MealSlot::Lunch), Some(CHICKEN_SALAD));
    assert_eq!(grid.get(DayOfWeek::Monday, MealSlot::Snack), None);
    assert_eq!(grid.get(DayOfWeek::Monday, MealSlot::Dinner), Some(LENTIL_SOUP));
    assert_eq!(grid.cells().filter(|(_, _, id)| id.is_some()).count(), 3);
}

#[test]
fn test_missing_slot_key_means_absent() {
    let partial = WEEK_JSON.replacen("\"snack\": 3, ", "", 1);
    let grid = parse_suggestion_payload(&partial).unwrap();
    assert_eq!(grid.get(DayOfWeek::Monday, MealSlot::Snack), None);
    assert_eq!(grid.get(DayOfWeek::Tuesday, MealSlot::Snack), Some(APPLE_YOGURT));
}

#[test]
fn test_non_integer_id_is_malformed() {
    for bad in ["\"lunch\": 2.5", "\"lunch\": \"pasta\"", "\"lunch\": -2", "\"lunch\": true"] {
        let payload = WEEK_JSON.replacen("\"lunch\": 2", bad, 1);
        let error = parse_suggestion_payload(&payload).unwrap_err();
        match error {
            PlanningError::MalformedSuggestionPayload { location, .. } => {
                assert_eq!(location, "monday.lunch");
            }
            other => panic!("expected MalformedSuggestionPayload for {bad}, got {other:?}"),
        }
    }
}

#[test]
fn test_missing_day_is_a_shape_error() {
    let payload = r#"{ "monday": { "breakfast": 1 } }"#;
    assert!(matches!(
        parse_suggestion_payload(payload),
        Err(PlanningError::InvalidGridShape { .. })
    ));
}

#[test]
fn test_wrong_row_count_is_a_shape_error() {
    assert!(matches!(
        parse_suggestion_payload("[[1, 2, 3, 4]]"),
        Err(PlanningError::InvalidGridShape { .. })
    ));
}

#[test]
fn test_text_without_json_is_malformed() {
    assert!(matches!(
        parse_suggestion_payload("I could not come up with a plan, sorry."),
        Err(PlanningError::MalformedSuggestionPayload { .. })
    ));
}

// ============================================================================
// PROVIDERS AND PLAN_WEEK
// ============================================================================

struct FailingCompletion;

#[async_trait]
impl TextCompletion for FailingCompletion {
    async fn complete(&self, _prompt: &str) -> AppResult<String> {
        Err(AppError::external_service("llm", "quota exceeded"))
    }
}

#[test]
fn test_request_lists_options_per_slot() {
    let request = SuggestionRequest::from_catalog(&fixture_catalog(), 1800.0);
    let lunch: Vec<RecipeId> = request
        .options_for(MealSlot::Lunch)
        .iter()
        .map(|o| o.id)
        .collect();
    assert_eq!(lunch, vec![CHICKEN_SALAD, LENTIL_SOUP]);

    let prompt = build_week_prompt(&request);
    assert!(prompt.contains("1800 kcal"));
    assert!(prompt.contains("Chicken Salad"));
}

#[tokio::test]
async fn test_plan_week_with_text_provider() {
    init_test_logging();
    let provider = TextSuggestionProvider::new(StaticCompletion(format!("```\n{WEEK_JSON}\n```")));
    let composer = WeeklyPlanComposer::new(&PlanningConfig::default());

    let composition = plan_week(&provider, &fixture_catalog(), &composer, 2000.0)
        .await
        .unwrap();
    assert_eq!(composition.plan.assigned_count(), 28);
    assert!(composition.warnings.is_empty());
}

#[tokio::test]
async fn test_plan_week_with_fixed_provider_reports_missing_recipes() {
    let mut grid = full_grid();
    grid.set(DayOfWeek::Monday, MealSlot::Snack, Some(RecipeId(404)));
    let provider: Box<dyn SuggestionProvider> = Box::new(FixedSuggestionProvider::new(grid));
    let composer = WeeklyPlanComposer::new(&PlanningConfig::default());

    let composition = plan_week(provider.as_ref(), &fixture_catalog(), &composer, 2000.0)
        .await
        .unwrap();
    assert_eq!(composition.plan.assigned_count(), 27);
    assert_eq!(
        composition.warnings_of(WarningKind::MissingRecipe).count(),
        1
    );
}

#[tokio::test]
async fn test_malformed_reply_fails_plan_week() {
    let provider = TextSuggestionProvider::new(StaticCompletion("no plan today".to_owned()));
    let composer = WeeklyPlanComposer::new(&PlanningConfig::default());

    let error = plan_week(&provider, &fixture_catalog(), &composer, 2000.0)
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);
}

#[tokio::test]
async fn test_backend_failure_propagates() {
    let provider = TextSuggestionProvider::new(FailingCompletion);
    let composer = WeeklyPlanComposer::new(&PlanningConfig::default());

    let error = plan_week(&provider, &fixture_catalog(), &composer, 2000.0)
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ExternalServiceError);
}
