// ABOUTME: JSON dataset loader reading PlanningDataset documents from strings or files
// ABOUTME: Enforces a file size limit and validates cross references before returning data
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::constants::dataset::MAX_DATASET_BYTES;
use crate::errors::ServiceError;
use platewise_core::errors::CatalogError;
use platewise_intelligence::catalog::{PlanningData, PlanningDataset};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Decode and validate a JSON dataset
///
/// # Errors
///
/// Returns `CatalogError::Decode` for malformed JSON and other `CatalogError`
/// variants when the dataset fails validation
pub fn load_dataset_from_str(json: &str) -> Result<PlanningData, CatalogError> {
    let dataset: PlanningDataset = serde_json::from_str(json)?;
    debug!(
        dataset.ingredients = dataset.ingredients.len(),
        dataset.templates = dataset.templates.len(),
        "Decoded planning dataset"
    );
    dataset.build()
}

/// Read a JSON dataset file without validating it
///
/// # Errors
///
/// Returns `ServiceError::Io` if the file cannot be read, `TooLarge` above the
/// size limit and `Catalog` if the JSON does not decode
pub fn read_dataset_from_path(path: &Path) -> Result<PlanningDataset, ServiceError> {
    let metadata = fs::metadata(path).map_err(|err| ServiceError::io(path, err))?;
    if metadata.len() > MAX_DATASET_BYTES {
        return Err(ServiceError::TooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            limit: MAX_DATASET_BYTES,
        });
    }
    let json = fs::read_to_string(path).map_err(|err| ServiceError::io(path, err))?;
    serde_json::from_str(&json).map_err(|err| ServiceError::Catalog(CatalogError::from(err)))
}

/// Read, decode and validate a JSON dataset file
///
/// # Errors
///
/// Returns `ServiceError` if the file cannot be read or the dataset is invalid
pub fn load_dataset_from_path(path: &Path) -> Result<PlanningData, ServiceError> {
    let data = read_dataset_from_path(path)?.build()?;
    info!(
        dataset.path = %path.display(),
        dataset.ingredients = data.catalog.len(),
        dataset.templates = data.library.len(),
        "Loaded planning dataset"
    );
    Ok(data)
}
