use crate::report::PerformanceReport;

use super::{
    Dimension, METRIC_AVERAGE_LATENCY, METRIC_ERROR, MetricDatum, MetricTimestamp, MetricUnit,
    StatusBucket,
};

const NANOS_PER_MILLI: f64 = 1_000_000.0;

/// Builds the full metric batch for one report: average latency, non-empty
/// status-code buckets, then the error tally.
#[must_use]
pub fn aggregate_report(
    report: &PerformanceReport,
    timestamp: MetricTimestamp,
    dimensions: &[Dimension],
) -> Vec<MetricDatum> {
    let mut metric_data = build_latency_metric_data(report, timestamp, dimensions);
    metric_data.extend(build_status_code_metric_data(
        report, timestamp, dimensions,
    ));
    metric_data.extend(build_error_metric_data(report, timestamp, dimensions));
    metric_data
}

/// Average request latency in milliseconds.
///
/// Returns no datum for a report without entries.
#[must_use]
pub fn build_latency_metric_data(
    report: &PerformanceReport,
    timestamp: MetricTimestamp,
    dimensions: &[Dimension],
) -> Vec<MetricDatum> {
    if report.entries.is_empty() {
        return Vec::new();
    }
    let total_nanos: f64 = report.entries.iter().map(|entry| entry.latency_nanos).sum();
    let average_nanos = total_nanos / report.entries.len() as f64;

    vec![MetricDatum {
        metric_name: METRIC_AVERAGE_LATENCY.to_owned(),
        dimensions: dimensions.to_vec(),
        timestamp,
        value: average_nanos / NANOS_PER_MILLI,
        unit: MetricUnit::Milliseconds,
    }]
}

/// Request counts per status-code bucket, skipping empty buckets.
#[must_use]
pub fn build_status_code_metric_data(
    report: &PerformanceReport,
    timestamp: MetricTimestamp,
    dimensions: &[Dimension],
) -> Vec<MetricDatum> {
    StatusBucket::ALL
        .iter()
        .filter_map(|bucket| {
            let count = report
                .entries
                .iter()
                .filter(|entry| StatusBucket::from_status_code(entry.status_code) == Some(*bucket))
                .count();
            (count > 0).then(|| MetricDatum {
                metric_name: bucket.label().to_owned(),
                dimensions: dimensions.to_vec(),
                timestamp,
                value: count as f64,
                unit: MetricUnit::None,
            })
        })
        .collect()
}

/// Total error occurrences across all error kinds. Always emitted, even at
/// zero.
#[must_use]
pub fn build_error_metric_data(
    report: &PerformanceReport,
    timestamp: MetricTimestamp,
    dimensions: &[Dimension],
) -> Vec<MetricDatum> {
    let error_count = report
        .errors
        .values()
        .fold(0u64, |total, count| total.saturating_add(*count));

    vec![MetricDatum {
        metric_name: METRIC_ERROR.to_owned(),
        dimensions: dimensions.to_vec(),
        timestamp,
        value: error_count as f64,
        unit: MetricUnit::None,
    }]
}
