//! Metric kinds and their wire names.

use std::fmt;
use std::str::FromStr;

use crate::error::VitalsError;

/// The closed set of metric kinds.
///
/// A `Gauge` is overwritten on each update (last-write-wins); a `Counter`
/// accumulates by addition. Anything else coming off the wire is rejected
/// at the parse boundary, so code past that boundary can match
/// exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    Gauge,
    Counter,
}

impl MetricKind {
    /// Wire name used in URL paths.
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Gauge => "gauge",
            MetricKind::Counter => "counter",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricKind {
    type Err = VitalsError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "gauge" => Ok(MetricKind::Gauge),
            "counter" => Ok(MetricKind::Counter),
            _ => Err(VitalsError::UnknownMetricType),
        }
    }
}
