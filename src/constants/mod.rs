// ABOUTME: Constants module for the Platewise service layer and CLI
// ABOUTME: Service names and dataset loading limits shared by the root crate
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Constants module
//!
//! Engine constants (energy densities, request limits) live in
//! `platewise_core::constants`; this module holds the ones only the service
//! layer and CLI need.

/// Service names
pub mod service_names {
    /// Platewise service name, also the tracing target of the root crate
    pub const PLATEWISE: &str = "platewise";
    /// CLI binary name
    pub const CLI: &str = "platewise-cli";
}

/// Dataset loading
pub mod dataset {
    /// Name reported for the compiled-in dataset
    pub const BUILTIN_NAME: &str = "builtin";
    /// Largest dataset file the loader will read (16 MiB)
    pub const MAX_DATASET_BYTES: u64 = 16 * 1024 * 1024;
    /// Largest preferences document the CLI will read (1 MiB)
    pub const MAX_REQUEST_BYTES: u64 = 1024 * 1024;
}
