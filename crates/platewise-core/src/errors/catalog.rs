// ABOUTME: Dataset validation errors for ingredients, templates and substitutions
// ABOUTME: Raised while building the read-only catalog, never during a planning request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ErrorCode;
use thiserror::Error;

/// Errors found while validating a dataset
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two ingredients share an id
    #[error("duplicate ingredient id '{ingredient_id}'")]
    DuplicateIngredient {
        /// Repeated id
        ingredient_id: String,
    },
    /// Two templates share an id
    #[error("duplicate template id '{template_id}'")]
    DuplicateTemplate {
        /// Repeated id
        template_id: String,
    },
    /// A template or substitution refers to an ingredient that is not in the catalog
    #[error("'{referenced_by}' refers to unknown ingredient '{ingredient_id}'")]
    UnknownIngredient {
        /// Template id or substitution key holding the reference
        referenced_by: String,
        /// Missing ingredient id
        ingredient_id: String,
    },
    /// A neutral-default entry points at a template that does not exist
    #[error("neutral default for {diet}/{slot} refers to unknown template '{template_id}'")]
    UnknownTemplate {
        /// Diet of the neutral entry
        diet: String,
        /// Slot of the neutral entry
        slot: String,
        /// Missing template id
        template_id: String,
    },
    /// A neutral-default template does not serve the slot or diet it is registered for
    #[error("template '{template_id}' cannot serve as neutral default for {diet}/{slot}")]
    NeutralMismatch {
        /// Template id
        template_id: String,
        /// Diet of the neutral entry
        diet: String,
        /// Slot of the neutral entry
        slot: String,
    },
    /// A template has no ingredients
    #[error("template '{template_id}' has no ingredients")]
    EmptyTemplate {
        /// Template id
        template_id: String,
    },
    /// A quantity or nutrient value is negative, zero where it must be positive, or not finite
    #[error("invalid value for '{owner}': {reason}")]
    InvalidValue {
        /// Ingredient or template id owning the value
        owner: String,
        /// Description of the problem
        reason: String,
    },
    /// The dataset could not be decoded
    #[error("failed to decode dataset: {0}")]
    Decode(String),
}

impl CatalogError {
    /// Stable error code for this error
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::DuplicateIngredient { .. } | Self::DuplicateTemplate { .. } => {
                ErrorCode::ResourceAlreadyExists
            }
            Self::UnknownIngredient { .. } | Self::UnknownTemplate { .. } => {
                ErrorCode::ResourceNotFound
            }
            Self::NeutralMismatch { .. } | Self::EmptyTemplate { .. } => ErrorCode::InvalidInput,
            Self::InvalidValue { .. } => ErrorCode::ValueOutOfRange,
            Self::Decode(_) => ErrorCode::SerializationError,
        }
    }

    /// Create an invalid-value error
    #[must_use]
    pub fn invalid_value(owner: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            owner: owner.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
