// ABOUTME: Suggestion provider returning a prepared candidate grid
// ABOUTME: Used for manual planning and deterministic tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use tracing::debug;

use super::{SuggestionProvider, SuggestionRequest};
use crate::errors::AppResult;
use crate::models::CandidateGrid;

/// Provider that always proposes the same grid
#[derive(Debug, Clone, Default)]
pub struct FixedSuggestionProvider {
    grid: CandidateGrid,
}

impl FixedSuggestionProvider {
    /// Provider proposing `grid`
    #[must_use]
    pub const fn new(grid: CandidateGrid) -> Self {
        Self { grid }
    }
}

#[async_trait]
impl SuggestionProvider for FixedSuggestionProvider {
    fn name(&self) -> &'static str {
        "fixed"
    }

    async fn suggest_week(&self, request: &SuggestionRequest) -> AppResult<CandidateGrid> {
        debug!(
            daily_calorie_target = request.daily_calorie_target,
            "Returning fixed candidate grid"
        );
        Ok(self.grid)
    }
}
