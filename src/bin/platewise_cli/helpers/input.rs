// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Input reading helpers for platewise-cli
// ABOUTME: Reads bounded JSON documents from files or stdin

use anyhow::{bail, Context, Result};
use platewise::constants::dataset::MAX_REQUEST_BYTES;
use platewise::errors::ServiceError;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Read `source` (a path, or `-` for stdin) up to the request size limit
pub fn read_document(source: &str) -> Result<String> {
    let mut buffer = String::new();
    if source == "-" {
        io::stdin()
            .take(MAX_REQUEST_BYTES + 1)
            .read_to_string(&mut buffer)
            .context("Failed to read preferences from stdin")?;
    } else {
        let path = Path::new(source);
        fs::File::open(path)
            .map_err(|err| ServiceError::io(path, err))?
            .take(MAX_REQUEST_BYTES + 1)
            .read_to_string(&mut buffer)
            .map_err(|err| ServiceError::io(path, err))?;
    }
    if buffer.len() as u64 > MAX_REQUEST_BYTES {
        bail!("Preferences document exceeds {MAX_REQUEST_BYTES} bytes");
    }
    Ok(buffer)
}
