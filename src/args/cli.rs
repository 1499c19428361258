use clap::Parser;
use std::path::PathBuf;

use super::parsers::{parse_output_path, parse_report_input};
use super::types::ReportInput;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Turn periodic load-test reports into CloudWatch-style metric batches."
)]
pub struct ReporterArgs {
    /// Script config (.toml or .json) carrying config.plugins.cloudwatch
    #[arg(long = "config", short = 'c', env = "STREST_CLOUDWATCH_CONFIG")]
    pub config: PathBuf,

    /// Newline-delimited JSON reports to read ("-" for stdin)
    #[arg(
        long = "reports",
        short = 'r',
        default_value = "-",
        value_parser = parse_report_input
    )]
    pub reports: ReportInput,

    /// Write metric batches as JSON lines to this file instead of stdout
    #[arg(long = "output", short = 'o', value_parser = parse_output_path)]
    pub output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long = "verbose", short = 'v')]
    pub verbose: bool,

    /// Disable colored log output
    #[arg(long = "no-color")]
    pub no_color: bool,
}
