use crate::error::SinkError;

use super::MetricBatch;

pub(super) fn format_batch_line(batch: &MetricBatch) -> Result<String, SinkError> {
    let mut line =
        serde_json::to_string(batch).map_err(|err| SinkError::Serialize { source: err })?;
    line.push('\n');
    Ok(line)
}
