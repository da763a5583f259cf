// ABOUTME: Service-level error type unifying request, dataset, configuration and I/O failures
// ABOUTME: Maps every failure to a stable ErrorCode and a serializable error response
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Service Errors
//!
//! The engine crates report narrow errors (`PlanError`, `CatalogError`,
//! `ConfigError`). The service layer adds file I/O and wraps them all in
//! [`ServiceError`] so callers get one type with a stable [`ErrorCode`].

pub use platewise_core::errors::{CatalogError, ErrorCode, PlanError};
pub use platewise_intelligence::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the planning service and its loaders
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Request failed validation
    #[error(transparent)]
    Plan(#[from] PlanError),

    /// Dataset failed validation or decoding
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Engine configuration is invalid
    #[error("Invalid planner configuration: {0}")]
    Config(#[from] ConfigError),

    /// File could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// File exceeds the loader's size limit
    #[error("{} is {size} bytes, above the {limit} byte limit", path.display())]
    TooLarge {
        /// File being read
        path: PathBuf,
        /// Actual size
        size: u64,
        /// Configured limit
        limit: u64,
    },
}

impl ServiceError {
    /// Stable error code
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Plan(err) => err.code(),
            Self::Catalog(err) => err.code(),
            Self::Config(err) => err.code(),
            Self::Io { .. } => ErrorCode::ResourceNotFound,
            Self::TooLarge { .. } => ErrorCode::ValueOutOfRange,
        }
    }

    /// I/O failure for `path`
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Serializable error body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error details
    pub error: ErrorResponseDetails,
}

/// Error details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Stable code
    pub code: ErrorCode,
    /// Human readable message
    pub message: String,
    /// Offending request field, for validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl From<&ServiceError> for ErrorResponse {
    fn from(error: &ServiceError) -> Self {
        let field = match error {
            ServiceError::Plan(err) => err.field().map(str::to_owned),
            _ => None,
        };
        Self {
            error: ErrorResponseDetails {
                code: error.code(),
                message: error.to_string(),
                field,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_error_keeps_field() {
        let err = ServiceError::from(PlanError::invalid_preferences(
            "diet_type",
            "unknown diet 'x'",
        ));
        let response = ErrorResponse::from(&err);
        assert_eq!(response.error.code, ErrorCode::InvalidInput);
        assert_eq!(response.error.field.as_deref(), Some("diet_type"));
    }

    #[test]
    fn test_io_error_code() {
        let err = ServiceError::io(
            "missing.json",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        assert_eq!(err.code(), ErrorCode::ResourceNotFound);
        assert!(err.to_string().contains("missing.json"));
    }
}
