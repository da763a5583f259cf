// ABOUTME: Logging configuration and structured logging setup for the planner and its CLI
// ABOUTME: Configures log levels, formatters, and output destinations via environment variables
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Structured logging configuration
//!
//! Logs go to stderr so that plan JSON written to stdout stays machine-readable.

use crate::constants::service_names;
use anyhow::Result;
use platewise_core::models::PlanResult;
use serde_json::json;
use std::env;
use std::io;
use std::time::Duration;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info, warn};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Include span open/close events
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for machine consumption
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for terminals
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value, defaulting to pretty
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            include_spans: false,
            service_name: service_names::PLATEWISE.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
        let format =
            env::var("LOG_FORMAT").map_or(LogFormat::Pretty, |value| LogFormat::parse(&value));

        Self {
            level,
            format,
            include_location: env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: env::var("LOG_INCLUDE_THREAD").is_ok(),
            include_spans: env::var("LOG_INCLUDE_SPANS").is_ok(),
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| service_names::PLATEWISE.into()),
            service_version: env::var("SERVICE_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_owned()),
        }
    }

    /// `RUST_LOG` when set, otherwise the configured level
    fn env_filter(&self) -> EnvFilter {
        self.filter_with(env::var("RUST_LOG").ok().as_deref())
    }

    /// Filter from `rust_log` or the configured level
    ///
    /// A bare level name also pins our crates to it; a directive list is used as given.
    fn filter_with(&self, rust_log: Option<&str>) -> EnvFilter {
        let base = EnvFilter::new(rust_log.unwrap_or(&self.level));
        let Ok(level) = self.level.trim().parse::<LevelFilter>() else {
            return base;
        };
        [
            service_names::PLATEWISE,
            "platewise_core",
            "platewise_intelligence",
        ]
        .iter()
        .fold(base, |filter, target| {
            filter.add_directive(
                format!("{target}={level}")
                    .parse()
                    .unwrap_or_else(|_| level.into()),
            )
        })
    }

    fn span_events(&self) -> FmtSpan {
        if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(self.span_events())
                    .json();

                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(self.span_events());

                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_file(false)
                    .with_line_number(false)
                    .with_thread_ids(false)
                    .with_thread_names(false)
                    .with_target(false)
                    .with_writer(io::stderr)
                    .with_span_events(FmtSpan::NONE);

                registry.with(compact_layer).try_init()?;
            }
        }

        self.log_startup_info();
        Ok(())
    }

    fn log_startup_info(&self) {
        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
                "features": {
                    "location": self.include_location,
                    "thread": self.include_thread,
                    "spans": self.include_spans
                }
            }
        });
        debug!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            "Logging initialized: {config_summary}"
        );
    }
}

/// Initialize logging with default configuration
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_default() -> Result<()> {
    LoggingConfig::default().init()
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}

/// Planner-specific logging helpers
pub struct PlanLogger;

impl PlanLogger {
    /// Log the outcome of one generated plan
    pub fn log_plan_summary(result: &PlanResult, elapsed: Duration) {
        let duration_ms = elapsed.as_millis() as u64;
        if result.is_complete() {
            info!(
                plan.status = "complete",
                plan.days = result.week_plan.days.len(),
                plan.mean_quality = result.mean_quality_score,
                plan.duration_ms = duration_ms,
                "Plan ready"
            );
        } else {
            warn!(
                plan.status = "partial_failure",
                plan.days = result.week_plan.days.len(),
                plan.days_requested = result.days_requested,
                plan.reasons = result.partial_failure_reasons.len(),
                plan.duration_ms = duration_ms,
                "Plan ready with degradations"
            );
        }
    }

    /// Log a rejected request
    pub fn log_rejected_request(field: Option<&str>, reason: &str) {
        warn!(
            request.field = field.unwrap_or("unknown"),
            request.reason = %reason,
            "Plan request rejected"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse("compact"), LogFormat::Compact);
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("anything"), LogFormat::Pretty);
    }

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Pretty);
        assert_eq!(config.service_name, "platewise");
    }

    #[test]
    fn test_bare_level_pins_our_crates() {
        let config = LoggingConfig {
            level: "debug".to_owned(),
            ..LoggingConfig::default()
        };
        let filter = config.filter_with(None).to_string().to_lowercase();
        assert!(filter.contains("platewise_core=debug"));
        assert!(filter.contains("platewise_intelligence=debug"));
    }

    #[test]
    fn test_directive_list_level_is_kept_as_given() {
        let config = LoggingConfig {
            level: "warn,platewise_intelligence=debug".to_owned(),
            ..LoggingConfig::default()
        };
        let filter = config.filter_with(None).to_string().to_lowercase();
        assert!(filter.contains("platewise_intelligence=debug"));
        assert!(!filter.contains("platewise_intelligence=warn"));
        assert!(!filter.contains("platewise_core"));
        assert!(filter.contains("warn"));
    }
}
