use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

/// One interval's snapshot of request outcomes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReport {
    #[serde(default, alias = "_entries")]
    pub entries: Vec<RequestEntry>,
    /// Epoch milliseconds, one per observed request.
    #[serde(
        default,
        alias = "_requestTimestamps",
        deserialize_with = "deserialize_epoch_millis"
    )]
    pub request_timestamps: Vec<i64>,
    /// Occurrence count per error kind.
    #[serde(default, alias = "_errors")]
    pub errors: BTreeMap<String, u64>,
}

/// A completed request, encoded on the wire as
/// `[timestamp, requestId, latencyNanos, statusCode]`.
///
/// The producer writes every number as a double, so the numeric slots accept
/// integral and fractional JSON numbers alike.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "(f64, String, f64, f64)")]
pub struct RequestEntry {
    pub timestamp: i64,
    pub request_id: String,
    pub latency_nanos: f64,
    pub status_code: u16,
}

impl From<(f64, String, f64, f64)> for RequestEntry {
    fn from(
        (timestamp, request_id, latency_nanos, status_code): (f64, String, f64, f64),
    ) -> Self {
        Self {
            timestamp: epoch_millis(timestamp),
            request_id,
            latency_nanos,
            status_code: status_code.trunc() as u16,
        }
    }
}

// Sub-millisecond precision is dropped; batch timestamps are whole milliseconds.
fn epoch_millis(value: f64) -> i64 {
    value.trunc() as i64
}

fn deserialize_epoch_millis<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<f64>::deserialize(deserializer)?;
    Ok(values.into_iter().map(epoch_millis).collect())
}
