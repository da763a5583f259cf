// ABOUTME: Domain service layer wrapping the planning engine for library and CLI callers
// ABOUTME: Provides dataset selection, request decoding and plan generation entry points
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services own a configured planner and translate between caller-facing
//! inputs (JSON documents, file paths) and the engine's typed API.

/// Meal plan generation over a chosen dataset
pub mod planning;

pub use planning::{PlanningService, TemplateSummary};
