// ABOUTME: Request-level error type returned by plan generation
// ABOUTME: Invalid preferences are rejected before any planning work starts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{CatalogError, ErrorCode};
use thiserror::Error;

/// Errors that abort a planning request
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// The request failed validation; no partial plan is produced
    #[error("Invalid preferences: {field}: {reason}")]
    InvalidPreferences {
        /// Request field that failed validation
        field: &'static str,
        /// Human-readable reason
        reason: String,
    },
    /// The planner was constructed over an inconsistent dataset
    #[error("Dataset error: {0}")]
    Dataset(#[from] CatalogError),
}

impl PlanError {
    /// Create an invalid-preferences error for `field`
    #[must_use]
    pub fn invalid_preferences(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidPreferences {
            field,
            reason: reason.into(),
        }
    }

    /// Stable error code for this error
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidPreferences { .. } => ErrorCode::InvalidInput,
            Self::Dataset(err) => err.code(),
        }
    }

    /// Name of the offending request field, when the error is a validation failure
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidPreferences { field, .. } => Some(*field),
            Self::Dataset(_) => None,
        }
    }
}
