//! The CloudWatch reporting plugin: validated config, report subscription,
//! and batch submission.
mod reporting;
mod state;


pub use reporting::{ActivePlugin, ReportingPlugin, ReportingSummary, SkipReason};
pub use state::PluginState;
