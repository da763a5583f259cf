// ABOUTME: Plan generation command for platewise-cli
// ABOUTME: Decodes single or batch preference documents and prints plans as JSON or summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{anyhow, Result};
use platewise::errors::{ErrorResponse, PlanError, ServiceError};
use platewise::models::{PlanRequest, PlanResult};
use platewise::services::PlanningService;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::helpers::display::{display_plan_summary, print_json};
use crate::helpers::input::read_document;

/// A preferences document holds one request or a batch
#[derive(Deserialize)]
#[serde(untagged)]
enum RequestDocument {
    Single(PlanRequest),
    Batch(Vec<PlanRequest>),
}

/// One batch entry: a plan or the error that rejected its request
#[derive(Serialize)]
#[serde(untagged)]
enum BatchEntry {
    Plan(Box<PlanResult>),
    Error(ErrorResponse),
}

/// Generate plans for the preferences in `source`
pub fn run(service: &PlanningService, source: &str, compact: bool, summary: bool) -> Result<()> {
    let json = read_document(source)?;
    let document: RequestDocument = serde_json::from_str(&json).map_err(|err| {
        let error = ServiceError::from(PlanError::invalid_preferences(
            "request",
            format!("malformed request: {err}"),
        ));
        print_error(&error, compact);
        anyhow!(error)
    })?;

    match document {
        RequestDocument::Single(request) => generate_one(service, &request, compact, summary),
        RequestDocument::Batch(requests) => {
            generate_batch(service, &requests, compact, summary);
            Ok(())
        }
    }
}

fn generate_one(
    service: &PlanningService,
    request: &PlanRequest,
    compact: bool,
    summary: bool,
) -> Result<()> {
    match service.generate(request) {
        Ok(plan) => {
            if !plan.is_complete() {
                warn!(
                    reasons = plan.partial_failure_reasons.len(),
                    "Plan generated with partial failures"
                );
            }
            if summary {
                display_plan_summary(&plan);
            } else {
                print_json(&plan, compact)?;
            }
            Ok(())
        }
        Err(err) => {
            print_error(&err, compact);
            Err(anyhow!(err))
        }
    }
}

fn generate_batch(
    service: &PlanningService,
    requests: &[PlanRequest],
    compact: bool,
    summary: bool,
) {
    info!(batch.size = requests.len(), "Generating batch");
    let results = service.generate_batch(requests);

    if summary {
        for (index, result) in results.iter().enumerate() {
            println!("\n# Request {}", index + 1);
            match result {
                Ok(plan) => display_plan_summary(plan),
                Err(err) => println!("Rejected: {err}"),
            }
        }
        return;
    }

    let entries: Vec<BatchEntry> = results
        .into_iter()
        .map(|result| match result {
            Ok(plan) => BatchEntry::Plan(Box::new(plan)),
            Err(err) => BatchEntry::Error(ErrorResponse::from(&err)),
        })
        .collect();
    if let Err(err) = print_json(&entries, compact) {
        warn!(error = %err, "Failed to print batch results");
    }
}

fn print_error(error: &ServiceError, compact: bool) {
    if let Err(err) = print_json(&ErrorResponse::from(error), compact) {
        warn!(error = %err, "Failed to print error response");
    }
}
