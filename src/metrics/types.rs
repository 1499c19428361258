use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

pub const METRIC_AVERAGE_LATENCY: &str = "AverageLatency";
pub const METRIC_ERROR: &str = "Error";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Dimension {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MetricUnit {
    Milliseconds,
    None,
}

/// Point in time shared by every datum of one batch.
///
/// Serializes as an ISO-8601 UTC string with millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MetricTimestamp(DateTime<Utc>);

impl MetricTimestamp {
    /// Returns `None` when the value is outside the representable date range.
    #[must_use]
    pub fn from_epoch_millis(epoch_millis: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(epoch_millis).map(Self)
    }

    #[must_use]
    pub fn epoch_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    #[must_use]
    pub fn to_iso8601(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

impl fmt::Display for MetricTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

impl Serialize for MetricTimestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_iso8601())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetricDatum {
    pub metric_name: String,
    pub dimensions: Vec<Dimension>,
    pub timestamp: MetricTimestamp,
    pub value: f64,
    pub unit: MetricUnit,
}

/// Status-code class keyed by the code's leading digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatusBucket {
    Status2xx,
    Status3xx,
    Status4xx,
    Status5xx,
}

impl StatusBucket {
    /// Buckets in emission order.
    pub const ALL: [Self; 4] = [
        Self::Status2xx,
        Self::Status3xx,
        Self::Status4xx,
        Self::Status5xx,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Status2xx => "2XX",
            Self::Status3xx => "3XX",
            Self::Status4xx => "4XX",
            Self::Status5xx => "5XX",
        }
    }

    /// Classifies a status code by its leading decimal digit.
    ///
    /// Codes that start with anything other than 2-5 belong to no bucket.
    #[must_use]
    pub const fn from_status_code(status_code: u16) -> Option<Self> {
        let mut leading = status_code;
        while leading >= 10 {
            leading /= 10;
        }
        match leading {
            2 => Some(Self::Status2xx),
            3 => Some(Self::Status3xx),
            4 => Some(Self::Status4xx),
            5 => Some(Self::Status5xx),
            _ => None,
        }
    }
}

impl fmt::Display for StatusBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
