// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for platewise-cli
// ABOUTME: Provides plan generation, template listing and dataset validation commands

pub mod dataset;
pub mod generate;
pub mod templates;
