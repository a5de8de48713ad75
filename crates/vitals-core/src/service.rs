//! Kind-routing service over a pair of stores.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{Result, VitalsError};
use crate::metric::MetricKind;
use crate::storage::MetricStorage;

/// Routes reads and writes to the store matching the metric kind.
///
/// Owns exactly one store per kind. Value validation happens here, before
/// any store mutation; the service has no side effects of its own.
pub struct MetricService {
    gauge: Arc<dyn MetricStorage>,
    counter: Arc<dyn MetricStorage>,
}

impl MetricService {
    pub fn new(gauge: Arc<dyn MetricStorage>, counter: Arc<dyn MetricStorage>) -> Self {
        Self { gauge, counter }
    }

    fn store(&self, kind: MetricKind) -> &dyn MetricStorage {
        match kind {
            MetricKind::Gauge => self.gauge.as_ref(),
            MetricKind::Counter => self.counter.as_ref(),
        }
    }

    /// Validate `value` for `kind` and write it through.
    pub fn set_value(&self, kind: MetricKind, name: &str, value: &str) -> Result<()> {
        validate_value(kind, value)?;
        tracing::debug!(%kind, name, value, "metric write");
        self.store(kind).set(kind, name, value)
    }

    /// Current value for `name` under `kind`.
    pub fn get_value(&self, kind: MetricKind, name: &str) -> Option<String> {
        self.store(kind).get(name)
    }

    /// Snapshot of every metric of `kind`.
    pub fn all_metrics(&self, kind: MetricKind) -> HashMap<String, String> {
        self.store(kind).get_all()
    }
}

fn validate_value(kind: MetricKind, value: &str) -> Result<()> {
    let ok = match kind {
        MetricKind::Gauge => value.parse::<f64>().is_ok(),
        MetricKind::Counter => value.parse::<i64>().is_ok(),
    };
    if ok {
        Ok(())
    } else {
        Err(VitalsError::InvalidValue(value.to_string()))
    }
}
