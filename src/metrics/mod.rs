//! Metric construction: dimensions, batch timestamps, and per-report
//! aggregation into CloudWatch-style metric data.
mod aggregate;
mod dimensions;
mod timestamp;
mod types;


pub use aggregate::{
    aggregate_report, build_error_metric_data, build_latency_metric_data,
    build_status_code_metric_data,
};
pub use dimensions::build_dimensions;
pub use timestamp::resolve_timestamp;
pub use types::{
    Dimension, METRIC_AVERAGE_LATENCY, METRIC_ERROR, MetricDatum, MetricTimestamp, MetricUnit,
    StatusBucket,
};
