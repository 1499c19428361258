//! Metric sinks: the submission seam and the local JSON-lines writer.
pub mod config;
mod format;
mod types;
mod writers;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::SinkTarget;
pub use types::{MetricBatch, MetricSink};
pub use writers::{JsonLinesSink, open_sink};
