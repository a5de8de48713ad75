//! Dual-interval control loop driving collection and reporting.

use std::time::Duration;

use tokio::time::{interval_at, Instant, MissedTickBehavior};

use vitals_core::Result;

use crate::collector::Collector;
use crate::reporter::Reporter;

/// Drives the collector and reporter on independent fixed intervals.
///
/// Both timers feed a single `select!` loop, so a poll callback and a
/// report callback never run concurrently; a slow report delays a due
/// poll instead of overlapping it, and missed ticks are delayed rather
/// than queued.
pub struct Scheduler {
    collector: Collector,
    reporter: Reporter,
    poll_interval: Duration,
    report_interval: Duration,
}

impl Scheduler {
    pub fn new(
        collector: Collector,
        reporter: Reporter,
        poll_interval: Duration,
        report_interval: Duration,
    ) -> Self {
        Self {
            collector,
            reporter,
            poll_interval,
            report_interval,
        }
    }

    /// Run until the first callback error; the agent treats it as fatal
    /// and exits.
    pub async fn run(mut self) -> Result<()> {
        // First tick after one full period, like a ticker.
        let mut poll = interval_at(Instant::now() + self.poll_interval, self.poll_interval);
        let mut report = interval_at(Instant::now() + self.report_interval, self.report_interval);
        poll.set_missed_tick_behavior(MissedTickBehavior::Delay);
        report.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = poll.tick() => {
                    self.collector.collect()?;
                    tracing::debug!("poll tick collected");
                }
                _ = report.tick() => {
                    self.reporter.report().await?;
                    self.collector.reset_poll_count()?;
                    tracing::info!("report cycle completed");
                }
            }
        }
    }
}

/// Build the report target from the configured address: keep the port
/// segment (default 8080 when absent) and talk to localhost.
pub fn report_host(address: &str) -> String {
    let port = address
        .rsplit_once(':')
        .map(|(_, port)| port)
        .filter(|port| !port.is_empty())
        .unwrap_or("8080");
    format!("http://localhost:{port}")
}
