use async_trait::async_trait;
use serde::Serialize;

use crate::error::SinkError;
use crate::metrics::MetricDatum;

/// One `PutMetricData` request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetricBatch {
    pub namespace: String,
    pub metric_data: Vec<MetricDatum>,
}

/// Destination for metric batches.
///
/// Implementations report failure through the returned error only; callers
/// log it and move on.
#[async_trait]
pub trait MetricSink: Send + Sync {
    async fn put_metric_data(&self, batch: &MetricBatch) -> Result<(), SinkError>;
}
