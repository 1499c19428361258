use super::MetricTimestamp;

/// Resolves the batch timestamp as the latest request timestamp of a report.
///
/// Returns `None` when the report saw no requests or the latest value is not a
/// representable date; callers skip submission in that case.
#[must_use]
pub fn resolve_timestamp(request_timestamps: &[i64]) -> Option<MetricTimestamp> {
    request_timestamps
        .iter()
        .copied()
        .max()
        .and_then(MetricTimestamp::from_epoch_millis)
}
