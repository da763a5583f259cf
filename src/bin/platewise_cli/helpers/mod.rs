// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Helper modules for platewise-cli
// ABOUTME: Output formatting, input reading and service construction

pub mod display;
pub mod input;
pub mod service;
