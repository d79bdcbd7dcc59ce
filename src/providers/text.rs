// ABOUTME: Text-backed suggestion provider and lenient parsing of model output into candidate grids
// ABOUTME: Strips code fences, extracts the outermost JSON value and drops trailing commas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::{Captures, Regex};
use serde_json::Value;
use tracing::{debug, info};

use super::prompt::build_week_prompt;
use super::{SuggestionProvider, SuggestionRequest, TextCompletion};
use crate::errors::{AppResult, PlanningError};
use crate::models::CandidateGrid;

/// Markdown code fence, optionally tagged `json`
static CODE_FENCE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?s)```(?:json|JSON)?\s*(.*?)```").ok());

/// A JSON string literal, or a comma directly before a closing brace or bracket.
/// String literals are matched so that `,]` and `,}` inside them are left alone.
static TRAILING_COMMA: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#""(?:[^"\\]|\\.)*"|,(\s*[}\]])"#).ok());

/// Keys some models wrap the week object in
const WRAPPER_KEYS: [&str; 3] = ["week", "plan", "meals"];

fn strip_code_fence(text: &str) -> &str {
    CODE_FENCE
        .as_ref()
        .and_then(|re| re.captures(text))
        .and_then(|captures| captures.get(1))
        .map_or(text, |body| body.as_str())
}

fn outermost_json(text: &str) -> Option<&str> {
    let start = text.find(['{', '['])?;
    let closing = if text[start..].starts_with('{') { '}' } else { ']' };
    let end = text.rfind(closing)?;
    (end > start).then(|| &text[start..=end])
}

fn remove_trailing_commas(json: &str) -> String {
    TRAILING_COMMA
        .as_ref()
        .map_or_else(
            || json.to_owned(),
            |re| {
                re.replace_all(json, |captures: &Captures<'_>| {
                    captures
                        .get(1)
                        .map_or_else(|| captures[0].to_owned(), |close| close.as_str().to_owned())
                })
                .into_owned()
            },
        )
}

fn unwrap_week(value: Value) -> Value {
    match value {
        Value::Object(mut object) if !object.contains_key("monday") => {
            for key in WRAPPER_KEYS {
                if let Some(inner) = object.remove(key) {
                    return inner;
                }
            }
            Value::Object(object)
        }
        other => other,
    }
}

/// Parse model output into a candidate grid
///
/// Accepts the JSON on its own, inside a markdown code fence, or surrounded by
/// prose. Trailing commas are tolerated; id coercion stays strict.
///
/// # Errors
///
/// Returns `PlanningError::MalformedSuggestionPayload` if no JSON can be recovered or a
/// slot value is not an integer id, and `InvalidGridShape` for a grid that is not 7x4
pub fn parse_suggestion_payload(text: &str) -> Result<CandidateGrid, PlanningError> {
    let body = strip_code_fence(text.trim());
    let json = outermost_json(body)
        .ok_or_else(|| PlanningError::malformed("payload", "no JSON object or array found"))?;
    let value: Value = serde_json::from_str(&remove_trailing_commas(json))
        .map_err(|e| PlanningError::malformed("payload", e.to_string()))?;

    CandidateGrid::from_json(&unwrap_week(value))
}

/// Canned completion backend that always replies with the same text
#[derive(Debug, Clone)]
pub struct StaticCompletion(pub String);

#[async_trait]
impl TextCompletion for StaticCompletion {
    async fn complete(&self, _prompt: &str) -> AppResult<String> {
        Ok(self.0.clone())
    }
}

/// Provider that prompts a text backend and parses its reply
#[derive(Debug, Clone)]
pub struct TextSuggestionProvider<T> {
    completion: T,
}

impl<T: TextCompletion> TextSuggestionProvider<T> {
    /// Provider over `completion`
    pub const fn new(completion: T) -> Self {
        Self { completion }
    }
}

#[async_trait]
impl<T: TextCompletion> SuggestionProvider for TextSuggestionProvider<T> {
    fn name(&self) -> &'static str {
        "text"
    }

    async fn suggest_week(&self, request: &SuggestionRequest) -> AppResult<CandidateGrid> {
        let prompt = build_week_prompt(request);
        debug!(prompt_len = prompt.len(), "Requesting week suggestion");

        let reply = self.completion.complete(&prompt).await?;
        let grid = parse_suggestion_payload(&reply)?;

        info!(
            proposed = grid.cells().filter(|(_, _, id)| id.is_some()).count(),
            "Week suggestion parsed"
        );
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outermost_json_skips_prose() {
        assert_eq!(
            outermost_json("Sure! {\"a\": {\"b\": 1}} Enjoy."),
            Some("{\"a\": {\"b\": 1}}")
        );
        assert_eq!(outermost_json("no json here"), None);
    }

    #[test]
    fn test_trailing_commas_removed() {
        assert_eq!(
            remove_trailing_commas("{\"a\": [1, 2,], \"b\": 3,\n}"),
            "{\"a\": [1, 2], \"b\": 3\n}"
        );
    }

    #[test]
    fn test_commas_inside_strings_survive() {
        assert_eq!(
            remove_trailing_commas(r#"{"note": "a,] b,}", "ids": [1,],}"#),
            r#"{"note": "a,] b,}", "ids": [1]}"#
        );
    }

    #[test]
    fn test_code_fence_body_extracted() {
        assert_eq!(strip_code_fence("```json\n[1]\n```"), "[1]\n");
    }
}
