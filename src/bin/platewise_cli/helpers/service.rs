// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Planning service construction for platewise-cli
// ABOUTME: Chooses the builtin dataset or a JSON dataset file

use anyhow::Result;
use platewise::services::PlanningService;
use std::path::Path;
use tracing::info;

/// Build the planning service over `dataset`, or the builtin dataset
pub fn load_service(dataset: Option<&Path>) -> Result<PlanningService> {
    let service = match dataset {
        Some(path) => PlanningService::from_dataset_path(path)?,
        None => PlanningService::builtin()?,
    };
    info!(dataset = service.dataset_name(), "Planning service ready");
    Ok(service)
}
