mod app;
mod config;
mod report;
mod sink;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use report::ReportError;
pub use sink::SinkError;
pub use validation::ValidationError;
