use std::sync::Arc;

use serde_json::Value;
use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinHandle, JoinSet};
use tracing::{debug, info, warn};

use crate::config::{PluginConfig, validate_config};
use crate::error::ConfigError;
use crate::metrics::{aggregate_report, build_dimensions, resolve_timestamp};
use crate::report::PerformanceReport;
use crate::sinks::{MetricBatch, MetricSink};

use super::PluginState;

/// Why a report produced no submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The report carried no request entries.
    EmptyReport,
    /// No batch timestamp could be derived from the report.
    NoTimestamp,
}

/// Counters for one plugin lifetime, returned once the report source closes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportingSummary {
    pub reports_received: u64,
    pub reports_skipped: u64,
    pub batches_submitted: u64,
    pub submissions_failed: u64,
}

impl ReportingSummary {
    fn record_completion(&mut self, completion: Result<bool, JoinError>) {
        match completion {
            Ok(true) => {}
            Ok(false) => {
                self.submissions_failed = self.submissions_failed.saturating_add(1);
            }
            Err(err) => {
                warn!("Metric submission task failed: {}", err);
                self.submissions_failed = self.submissions_failed.saturating_add(1);
            }
        }
    }
}

/// A plugin whose configuration has been validated but which has not yet
/// subscribed to reports.
pub struct ReportingPlugin {
    config: PluginConfig,
    sink: Arc<dyn MetricSink>,
}

impl ReportingPlugin {
    /// Validates `script_config` and builds a plugin that submits to `sink`.
    ///
    /// # Errors
    ///
    /// Returns the first configuration problem found; no plugin is created, so
    /// a plugin is first observable in [`PluginState::Validated`].
    pub fn init(script_config: &Value, sink: Arc<dyn MetricSink>) -> Result<Self, ConfigError> {
        let config = validate_config(script_config)?;
        Ok(Self::from_config(config, sink))
    }

    #[must_use]
    pub fn from_config(config: PluginConfig, sink: Arc<dyn MetricSink>) -> Self {
        Self { config, sink }
    }

    #[must_use]
    pub const fn state(&self) -> PluginState {
        PluginState::Validated
    }

    #[must_use]
    pub const fn config(&self) -> &PluginConfig {
        &self.config
    }

    /// Transforms one report into the batch to submit.
    ///
    /// # Errors
    ///
    /// Returns the [`SkipReason`] when the report must not be submitted.
    pub fn prepare_batch(&self, report: &PerformanceReport) -> Result<MetricBatch, SkipReason> {
        if report.entries.is_empty() {
            return Err(SkipReason::EmptyReport);
        }
        let timestamp =
            resolve_timestamp(&report.request_timestamps).ok_or(SkipReason::NoTimestamp)?;
        let dimensions = build_dimensions(self.config.dimensions());

        Ok(MetricBatch {
            namespace: self.config.namespace().to_owned(),
            metric_data: aggregate_report(report, timestamp, &dimensions),
        })
    }

    /// Subscribes to `events` and starts reporting on the current tokio
    /// runtime.
    ///
    /// Reports are handled one at a time in arrival order. Submissions run in
    /// the background and never hold up the next report.
    #[must_use]
    pub fn activate(self, events: mpsc::Receiver<PerformanceReport>) -> ActivePlugin {
        info!(
            namespace = %self.config.namespace(),
            region = %self.config.region(),
            dimensions = self.config.dimensions().map_or(0, |dimensions| dimensions.len()),
            "CloudWatch reporting active"
        );
        let handle = tokio::spawn(self.run(events));
        ActivePlugin { handle }
    }

    async fn run(self, mut events: mpsc::Receiver<PerformanceReport>) -> ReportingSummary {
        let mut summary = ReportingSummary::default();
        let mut in_flight = JoinSet::new();

        while let Some(report) = events.recv().await {
            summary.reports_received = summary.reports_received.saturating_add(1);
            match self.prepare_batch(&report) {
                Ok(batch) => {
                    in_flight.spawn(submit_batch(Arc::clone(&self.sink), batch));
                    summary.batches_submitted = summary.batches_submitted.saturating_add(1);
                }
                Err(SkipReason::EmptyReport) => {
                    debug!("Report has no entries; nothing to submit");
                    summary.reports_skipped = summary.reports_skipped.saturating_add(1);
                }
                Err(SkipReason::NoTimestamp) => {
                    info!(
                        request_timestamps = report.request_timestamps.len(),
                        "Failed to get timestamp value, skipping report"
                    );
                    summary.reports_skipped = summary.reports_skipped.saturating_add(1);
                }
            }
            while let Some(completion) = in_flight.try_join_next() {
                summary.record_completion(completion);
            }
        }

        while let Some(completion) = in_flight.join_next().await {
            summary.record_completion(completion);
        }
        info!(
            received = summary.reports_received,
            skipped = summary.reports_skipped,
            submitted = summary.batches_submitted,
            failed = summary.submissions_failed,
            "Report source closed"
        );
        summary
    }
}

async fn submit_batch(sink: Arc<dyn MetricSink>, batch: MetricBatch) -> bool {
    match sink.put_metric_data(&batch).await {
        Ok(()) => {
            debug!(
                namespace = %batch.namespace,
                metrics = batch.metric_data.len(),
                "Reported metrics"
            );
            true
        }
        Err(err) => {
            warn!("Error reporting metrics via put_metric_data: {}", err);
            false
        }
    }
}

/// A plugin that has subscribed to its report source.
pub struct ActivePlugin {
    handle: JoinHandle<ReportingSummary>,
}

impl ActivePlugin {
    #[must_use]
    pub const fn state(&self) -> PluginState {
        PluginState::Active
    }

    /// Waits for the report source to close and in-flight submissions to
    /// settle.
    ///
    /// # Errors
    ///
    /// Returns an error if the reporting task panicked or was cancelled.
    pub async fn finished(self) -> Result<ReportingSummary, JoinError> {
        self.handle.await
    }
}
