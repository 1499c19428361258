//! Binary entry point: wires the script config, sink, report source, and
//! plugin together.
use clap::Parser;
use tokio::io::BufReader;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::args::{ReportInput, ReporterArgs};
use crate::config::{load_script_config, validate_config};
use crate::error::{AppError, AppResult, ReportError, ValidationError};
use crate::plugin::ReportingPlugin;
use crate::report::{REPORT_CHANNEL_CAPACITY, forward_reports};
use crate::sinks::{SinkTarget, open_sink};

/// Parses CLI arguments and runs the reporter to completion.
///
/// # Errors
///
/// Returns an error for fatal setup failures: unreadable or invalid config,
/// an output that cannot be opened, or a reports file that cannot be opened.
pub fn run() -> AppResult<()> {
    let args = ReporterArgs::parse();

    crate::logger::init_logging(args.verbose, args.no_color);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| AppError::validation(ValidationError::RuntimeBuildFailed { source: err }))?;

    runtime.block_on(run_async(args))
}

async fn run_async(args: ReporterArgs) -> AppResult<()> {
    let script_config = load_script_config(&args.config)?;
    let plugin_config = validate_config(&script_config)?;
    let target = SinkTarget::from_output(args.output);
    let sink = open_sink(&target).await?;
    let plugin = ReportingPlugin::from_config(plugin_config, sink);

    let report_file = match &args.reports {
        ReportInput::Stdin => None,
        ReportInput::File(path) => Some(tokio::fs::File::open(path).await.map_err(|err| {
            AppError::report(ReportError::Open {
                path: path.display().to_string(),
                source: err,
            })
        })?),
    };

    info!(
        config = %args.config.display(),
        reports = %args.reports,
        output = %target.describe(),
        "Starting reporter"
    );

    let (events_tx, events_rx) = mpsc::channel(REPORT_CHANNEL_CAPACITY);
    let active = plugin.activate(events_rx);

    let read_result = match report_file {
        Some(file) => forward_reports(BufReader::new(file), events_tx).await,
        None => forward_reports(BufReader::new(tokio::io::stdin()), events_tx).await,
    };
    match read_result {
        Ok(read) => info!(
            forwarded = read.forwarded,
            malformed = read.malformed,
            "Report source drained"
        ),
        Err(err) => warn!("Stopped reading reports: {}", err),
    }

    active.finished().await?;
    Ok(())
}
