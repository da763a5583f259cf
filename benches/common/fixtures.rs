// ABOUTME: Benchmark fixtures producing realistic plan requests across diets and horizons
// ABOUTME: Requests are generated deterministically so runs are comparable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for plan requests.

use platewise::models::{DietType, PlanRequest};

/// Predefined batch sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum RequestBatchSize {
    /// Small batch (8 requests)
    Small,
    /// Medium batch (64 requests), a busy minute for a planning service
    Medium,
}

impl RequestBatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 8,
            Self::Medium => 64,
        }
    }
}

/// Generate a batch of varied requests, cycling diets, calories and horizons
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn generate_requests(size: RequestBatchSize) -> Vec<PlanRequest> {
    (0..size.count())
        .map(|index| {
            let diet = DietType::ALL[index % DietType::ALL.len()];
            let calories = 1500.0 + ((index * 173) % 1500) as f64;
            let days = 1 + (index % 7) as u32;
            PlanRequest::new(calories, diet.as_str()).with_days(days)
        })
        .collect()
}
