//! Metric storage contract and the in-memory implementation.
//!
//! One store instance holds the metrics of one kind. The contract is three
//! operations; each is atomic with respect to the others, but consecutive
//! calls are not. Callers needing read-modify-write atomicity must bring
//! their own synchronization, which this system does not.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::{Result, VitalsError};
use crate::metric::MetricKind;

/// Key-value storage for one metric kind.
///
/// Implementations must be shareable across concurrent request handlers.
/// A persistent implementation can slot in behind the same three
/// operations.
pub trait MetricStorage: Send + Sync {
    /// Current value for `name`, if any.
    fn get(&self, name: &str) -> Option<String>;

    /// Write `value` under `name` with kind-specific semantics: gauges
    /// overwrite, counters add to the stored integer (missing reads as 0).
    ///
    /// Fails with `InvalidValue` when `value` (or, for counters, the
    /// previously stored value) does not parse under the kind's numeric
    /// type. On failure the store is left unchanged.
    fn set(&self, kind: MetricKind, name: &str, value: &str) -> Result<()>;

    /// Point-in-time copy of every entry, not a live view.
    fn get_all(&self) -> HashMap<String, String>;
}

/// In-memory store: a single mutex over a name -> value map.
#[derive(Default)]
pub struct MemoryMetricStorage {
    data: Mutex<HashMap<String, String>>,
}

impl MemoryMetricStorage {
    pub fn new() -> Self {
        Self::default()
    }

    // A poisoned lock still holds a consistent string map; recover it.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.data.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl MetricStorage for MemoryMetricStorage {
    fn get(&self, name: &str) -> Option<String> {
        self.lock().get(name).cloned()
    }

    fn set(&self, kind: MetricKind, name: &str, value: &str) -> Result<()> {
        let mut data = self.lock();
        match kind {
            MetricKind::Gauge => {
                value
                    .parse::<f64>()
                    .map_err(|_| VitalsError::InvalidValue(value.to_string()))?;
                // Stored verbatim: a gauge read must return exactly the
                // string that was written.
                data.insert(name.to_string(), value.to_string());
            }
            MetricKind::Counter => {
                let incoming: i64 = value
                    .parse()
                    .map_err(|_| VitalsError::InvalidValue(value.to_string()))?;
                let current: i64 = match data.get(name) {
                    Some(stored) => stored
                        .parse()
                        .map_err(|_| VitalsError::InvalidValue(stored.clone()))?,
                    None => 0,
                };
                data.insert(name.to_string(), (current + incoming).to_string());
            }
        }
        Ok(())
    }

    fn get_all(&self) -> HashMap<String, String> {
        self.lock().clone()
    }
}
