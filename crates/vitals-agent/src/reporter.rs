//! Outbound reporting: push every locally stored metric to the server.

use std::sync::Arc;

use async_trait::async_trait;

use vitals_core::service::MetricService;
use vitals_core::{MetricKind, Result, VitalsError};

/// Transport seam for pushing a single metric.
///
/// Production uses `HttpSink`; tests substitute a recording sink.
#[async_trait]
pub trait MetricSink: Send + Sync {
    async fn push(&self, kind: MetricKind, name: &str, value: &str) -> Result<()>;
}

/// HTTP sink: `POST {base}/update/{kind}/{name}/{value}`.
pub struct HttpSink {
    client: reqwest::Client,
    base: String,
}

impl HttpSink {
    pub fn new(base: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base,
        }
    }
}

#[async_trait]
impl MetricSink for HttpSink {
    async fn push(&self, kind: MetricKind, name: &str, value: &str) -> Result<()> {
        // Metric names travel lowercased in the path.
        let url = format!(
            "{}/update/{}/{}/{}",
            self.base,
            kind,
            name.to_lowercase(),
            value
        );
        let response = self
            .client
            .post(&url)
            .send()
            .await
            .map_err(|err| VitalsError::Internal(format!("failed to send metric: {err}")))?;
        let status = response.status();
        if !status.is_success() {
            return Err(VitalsError::Internal(format!(
                "bad status {status} for {url}"
            )));
        }
        tracing::debug!(%url, status = status.as_u16(), "metric pushed");
        Ok(())
    }
}

/// Pushes every gauge, then every counter, one request per metric.
///
/// The first failure aborts the remainder of the cycle and propagates;
/// the next scheduled cycle starts fresh from current store state.
pub struct Reporter {
    service: Arc<MetricService>,
    sink: Arc<dyn MetricSink>,
}

impl Reporter {
    pub fn new(service: Arc<MetricService>, sink: Arc<dyn MetricSink>) -> Self {
        Self { service, sink }
    }

    pub async fn report(&self) -> Result<()> {
        for kind in [MetricKind::Gauge, MetricKind::Counter] {
            for (name, value) in self.service.all_metrics(kind) {
                self.sink.push(kind, &name, &value).await?;
            }
        }
        Ok(())
    }
}
