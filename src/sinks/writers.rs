use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::SinkError;

use super::config::SinkTarget;
use super::format::format_batch_line;
use super::{MetricBatch, MetricSink};

type BoxedWriter = Box<dyn AsyncWrite + Send + Unpin>;

/// Writes each batch as one JSON line.
pub struct JsonLinesSink {
    destination: String,
    writer: Mutex<BoxedWriter>,
}

impl JsonLinesSink {
    #[must_use]
    pub fn from_writer<W>(writer: W, destination: &str) -> Self
    where
        W: AsyncWrite + Send + Unpin + 'static,
    {
        Self {
            destination: destination.to_owned(),
            writer: Mutex::new(Box::new(writer)),
        }
    }

    #[must_use]
    pub fn stdout() -> Self {
        Self::from_writer(tokio::io::stdout(), "stdout")
    }

    /// Creates (or truncates) the file at `target` and writes batches to it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created.
    pub async fn create(target: &SinkTarget) -> Result<Self, SinkError> {
        match target {
            SinkTarget::Stdout => Ok(Self::stdout()),
            SinkTarget::File(path) => {
                let file = tokio::fs::File::create(path)
                    .await
                    .map_err(|err| SinkError::Open {
                        path: path.display().to_string(),
                        source: err,
                    })?;
                Ok(Self::from_writer(file, &target.describe()))
            }
        }
    }

    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }
}

#[async_trait]
impl MetricSink for JsonLinesSink {
    async fn put_metric_data(&self, batch: &MetricBatch) -> Result<(), SinkError> {
        let line = format_batch_line(batch)?;
        let mut writer = self.writer.lock().await;
        writer
            .write_all(line.as_bytes())
            .await
            .map_err(|err| SinkError::Write { source: err })?;
        writer
            .flush()
            .await
            .map_err(|err| SinkError::Write { source: err })?;
        debug!(
            destination = %self.destination,
            namespace = %batch.namespace,
            metrics = batch.metric_data.len(),
            "Wrote metric batch"
        );
        Ok(())
    }
}

/// Opens the sink for `target`.
///
/// # Errors
///
/// Returns an error if the output cannot be opened.
pub async fn open_sink(target: &SinkTarget) -> Result<Arc<dyn MetricSink>, SinkError> {
    let sink = JsonLinesSink::create(target).await?;
    Ok(Arc::new(sink))
}
