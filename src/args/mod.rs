//! CLI argument types and parsing helpers.
mod cli;
pub(crate) mod parsers;
mod types;


pub use cli::ReporterArgs;
pub use types::ReportInput;
