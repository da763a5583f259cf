// ABOUTME: Core types and constants for the Platewise meal-plan optimization engine
// ABOUTME: Foundation crate with error handling, nutrition constants, and plan data models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Platewise Core
//!
//! Foundation crate providing the shared vocabulary of the Platewise meal-plan
//! optimizer. It holds no algorithms, only the types every other crate agrees on.
//!
//! ## Modules
//!
//! - **errors**: `PlanError`, `CatalogError` and the stable `ErrorCode` table
//! - **constants**: Energy densities and request bounds
//! - **models**: Ingredients, templates, preferences and the `PlanResult` contract

/// Unified error handling with stable error codes
pub mod errors;

/// Nutrition and request-limit constants
pub mod constants;

/// Core data models (ingredients, templates, preferences, plans)
pub mod models;
