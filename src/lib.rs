//! Core library for the `strest-cloudwatch` reporter.
//!
//! The reporter subscribes to periodic load-test reports and turns each one
//! into a CloudWatch-style `PutMetricData` batch: average latency,
//! per-status-class request counts, and an error tally, all stamped with the
//! report's latest request time and the configured dimensions. The binary
//! feeds reports from newline-delimited JSON and writes batches as JSON lines.
pub mod args;
pub mod config;
pub mod entry;
pub mod error;
pub mod logger;
pub mod metrics;
pub mod plugin;
pub mod report;
pub mod sinks;
