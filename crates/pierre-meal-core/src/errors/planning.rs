// ABOUTME: Planning engine error types for portion sizing, grid shape, and payload coercion
// ABOUTME: Provides structured errors that convert into the main AppError system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

use super::{AppError, ErrorCode};
use crate::models::RecipeId;

/// Errors raised by the planning engine.
///
/// Only some of these are fatal to a composition run: `ZeroCalorieDensity` is caught
/// by the composer and downgraded to a warning, while shape and payload errors abort.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanningError {
    /// Recipe has zero calories per 100g, so no gram quantity can be derived
    #[error("recipe {recipe_id} has zero calorie density and cannot be sized")]
    ZeroCalorieDensity {
        /// Recipe that could not be sized
        recipe_id: RecipeId,
    },

    /// Candidate grid does not have 7 days of 4 slots
    #[error("candidate grid must be 7 days x 4 slots: {reason}")]
    InvalidGridShape {
        /// What was wrong with the shape
        reason: String,
    },

    /// A candidate slot value could not be coerced to an integer recipe id
    #[error("malformed suggestion payload at {location}: {reason}")]
    MalformedSuggestionPayload {
        /// Day/slot path of the offending value
        location: String,
        /// Why the value was rejected
        reason: String,
    },

    /// Recipe violates a structural invariant
    #[error("recipe {recipe_id} is invalid: {reason}")]
    InvalidRecipe {
        /// Offending recipe
        recipe_id: RecipeId,
        /// Violated invariant
        reason: String,
    },

    /// Quantity was negative or not finite
    #[error("quantity must be a finite non-negative number, got {quantity}")]
    NegativeQuantity {
        /// Rejected quantity
        quantity: f64,
    },

    /// Daily calorie target was negative or not finite
    #[error("daily calorie target must be a finite non-negative number, got {target}")]
    InvalidCalorieTarget {
        /// Rejected target
        target: f64,
    },

    /// Reference portion for scaling was zero, negative or not finite
    #[error("reference portion must be greater than zero, got {portion}")]
    InvalidPortion {
        /// Rejected portion in grams
        portion: f64,
    },
}

impl PlanningError {
    /// Error code used when this error crosses into `AppError`
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::ZeroCalorieDensity { .. }
            | Self::NegativeQuantity { .. }
            | Self::InvalidCalorieTarget { .. }
            | Self::InvalidPortion { .. } => ErrorCode::ValueOutOfRange,
            Self::InvalidGridShape { .. } | Self::MalformedSuggestionPayload { .. } => {
                ErrorCode::InvalidFormat
            }
            Self::InvalidRecipe { .. } => ErrorCode::InvalidInput,
        }
    }

    /// Create a malformed payload error
    #[must_use]
    pub fn malformed(location: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedSuggestionPayload {
            location: location.into(),
            reason: reason.into(),
        }
    }

    /// Create a grid shape error
    #[must_use]
    pub fn grid_shape(reason: impl Into<String>) -> Self {
        Self::InvalidGridShape {
            reason: reason.into(),
        }
    }

    /// Create an invalid recipe error
    #[must_use]
    pub fn invalid_recipe(recipe_id: RecipeId, reason: impl Into<String>) -> Self {
        Self::InvalidRecipe {
            recipe_id,
            reason: reason.into(),
        }
    }
}

impl From<PlanningError> for AppError {
    fn from(error: PlanningError) -> Self {
        Self::new(error.error_code(), error.to_string()).with_source(error)
    }
}
