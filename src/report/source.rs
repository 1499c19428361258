use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::error::ReportError;

use super::PerformanceReport;

pub const REPORT_CHANNEL_CAPACITY: usize = 64;

/// Line counts observed while forwarding a report stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadSummary {
    pub forwarded: u64,
    pub malformed: u64,
}

/// Decodes one NDJSON line. Blank lines yield `Ok(None)`.
///
/// # Errors
///
/// Returns an error when the line is not a valid report object.
pub fn parse_report_line(
    line: &str,
    line_number: u64,
) -> Result<Option<PerformanceReport>, ReportError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(trimmed)
        .map(Some)
        .map_err(|err| ReportError::Decode {
            line: line_number,
            source: err,
        })
}

/// Reads newline-delimited reports and publishes each one on `events`, in
/// order. Malformed lines are logged and skipped. Stops early if the
/// receiving side has gone away.
///
/// # Errors
///
/// Returns an error when the underlying reader fails.
pub async fn forward_reports<R>(
    reader: R,
    events: mpsc::Sender<PerformanceReport>,
) -> Result<ReadSummary, ReportError>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut summary = ReadSummary::default();
    let mut line_number = 0u64;

    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|err| ReportError::Read { source: err })?
    {
        line_number = line_number.saturating_add(1);
        match parse_report_line(&line, line_number) {
            Ok(Some(report)) => {
                if events.send(report).await.is_err() {
                    debug!("Report subscriber closed; stopping reader");
                    break;
                }
                summary.forwarded = summary.forwarded.saturating_add(1);
            }
            Ok(None) => {}
            Err(err) => {
                warn!("Skipping report: {}", err);
                summary.malformed = summary.malformed.saturating_add(1);
            }
        }
    }

    Ok(summary)
}
