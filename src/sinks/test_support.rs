use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::SinkError;

use super::{MetricBatch, MetricSink};

#[derive(Default)]
pub(crate) struct RecordingSink {
    batches: Mutex<Vec<MetricBatch>>,
}

impl RecordingSink {
    pub(crate) async fn batches(&self) -> Vec<MetricBatch> {
        self.batches.lock().await.clone()
    }
}

#[async_trait]
impl MetricSink for RecordingSink {
    async fn put_metric_data(&self, batch: &MetricBatch) -> Result<(), SinkError> {
        self.batches.lock().await.push(batch.clone());
        Ok(())
    }
}

/// Rejects every batch.
pub(crate) struct FailingSink;

#[async_trait]
impl MetricSink for FailingSink {
    async fn put_metric_data(&self, batch: &MetricBatch) -> Result<(), SinkError> {
        Err(SinkError::Rejected {
            message: format!("throttled namespace {}", batch.namespace),
        })
    }
}
