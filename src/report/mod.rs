//! Performance reports and the event source that delivers them.
mod source;
mod types;

#[cfg(test)]
mod tests;

pub use source::{REPORT_CHANNEL_CAPACITY, ReadSummary, forward_reports, parse_report_line};
pub use types::{PerformanceReport, RequestEntry};
