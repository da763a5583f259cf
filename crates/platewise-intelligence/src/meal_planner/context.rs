// ABOUTME: Per-request planning context holding phase, usage history, counters and deadline
// ABOUTME: All mutable planning state lives here so the engine itself stays reentrant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use platewise_core::models::{DayUsage, UsageHistory};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::debug;

/// Stage of plan generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationPhase {
    /// Request accepted, nothing planned yet
    Init,
    /// Choosing a template for a slot
    Selecting,
    /// Fitting portions to the slot target
    Optimizing,
    /// Checking and repairing compliance
    Validating,
    /// Redistributing residual calories across a day
    Rebalancing,
    /// Every day and slot finished cleanly
    Complete,
    /// Finished with degraded or missing slots, or out of time
    PartialFailure,
}

impl GenerationPhase {
    /// True for `Complete` and `PartialFailure`
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Complete | Self::PartialFailure)
    }

    /// True when moving from `self` to `next` is a legal transition
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        match (self, next) {
            (Self::Complete | Self::PartialFailure, _) => false,
            (_, Self::Complete | Self::PartialFailure)
            | (
                Self::Init | Self::Validating | Self::Rebalancing,
                Self::Selecting | Self::Rebalancing,
            )
            | (Self::Selecting, Self::Optimizing | Self::Selecting | Self::Rebalancing)
            | (Self::Optimizing, Self::Validating | Self::Rebalancing)
            | (Self::Validating, Self::Optimizing)
            | (Self::Rebalancing, Self::Optimizing) => true,
            _ => false,
        }
    }

    /// Lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Selecting => "selecting",
            Self::Optimizing => "optimizing",
            Self::Validating => "validating",
            Self::Rebalancing => "rebalancing",
            Self::Complete => "complete",
            Self::PartialFailure => "partial_failure",
        }
    }
}

impl fmt::Display for GenerationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Work counters for one request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanningCounters {
    /// Slots that went through selection
    pub slots_attempted: u32,
    /// Optimizer runs, including re-runs after substitution and rebalancing
    pub optimizer_runs: u32,
    /// Refinement iterations across all runs
    pub optimizer_iterations: u32,
    /// Ingredient substitutions performed
    pub substitutions: u32,
    /// Rebalancing passes across all days
    pub rebalance_passes: u32,
}

/// Mutable state of one planning request
#[derive(Debug, Clone)]
pub struct PlanningContext {
    phase: GenerationPhase,
    usage: UsageHistory,
    counters: PlanningCounters,
    deadline: Option<Instant>,
}

impl PlanningContext {
    /// Start a request, with an optional time budget measured from now
    #[must_use]
    pub fn new(time_budget: Option<Duration>) -> Self {
        Self::with_deadline(time_budget.map(|budget| Instant::now() + budget))
    }

    /// Start a request with an absolute deadline
    #[must_use]
    pub fn with_deadline(deadline: Option<Instant>) -> Self {
        Self {
            phase: GenerationPhase::Init,
            usage: UsageHistory::default(),
            counters: PlanningCounters::default(),
            deadline,
        }
    }

    /// Current phase
    #[must_use]
    pub const fn phase(&self) -> GenerationPhase {
        self.phase
    }

    /// Move to `next`
    ///
    /// Illegal transitions fail a debug assertion; release builds log and ignore them.
    pub fn transition(&mut self, next: GenerationPhase) {
        if self.phase == next && !next.is_terminal() {
            return;
        }
        let legal = self.phase.can_transition_to(next);
        debug_assert!(legal, "illegal phase transition {} -> {next}", self.phase);
        if legal {
            debug!(plan.phase.from = %self.phase, plan.phase.to = %next, "Phase transition");
            self.phase = next;
        } else {
            debug!(
                plan.phase.from = %self.phase,
                plan.phase.to = %next,
                "Ignored illegal phase transition"
            );
        }
    }

    /// True once the deadline has passed
    #[must_use]
    pub fn deadline_exceeded(&self) -> bool {
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// Usage history of completed days
    #[must_use]
    pub const fn usage(&self) -> &UsageHistory {
        &self.usage
    }

    /// Record a completed day
    pub fn record_day(&mut self, usage: DayUsage) {
        self.usage.record_day(usage);
    }

    /// Work counters
    #[must_use]
    pub const fn counters(&self) -> &PlanningCounters {
        &self.counters
    }

    /// Mutable work counters
    pub fn counters_mut(&mut self) -> &mut PlanningCounters {
        &mut self.counters
    }

    /// Consume the context, keeping its usage history
    #[must_use]
    pub fn into_usage(self) -> UsageHistory {
        self.usage
    }
}
