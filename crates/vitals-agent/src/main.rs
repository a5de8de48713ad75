//! vitals agent binary.
//!
//! Samples host statistics on the poll interval and pushes every stored
//! metric to the server on the report interval. Any cycle error is fatal
//! by design.

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{fmt, EnvFilter};

use vitals_agent::collector::Collector;
use vitals_agent::config::Config;
use vitals_agent::reporter::{HttpSink, Reporter};
use vitals_agent::scheduler::{report_host, Scheduler};
use vitals_core::service::MetricService;
use vitals_core::storage::MemoryMetricStorage;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = Config::load()?;
    fmt()
        .with_env_filter(
            EnvFilter::try_new(&cfg.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let service = Arc::new(MetricService::new(
        Arc::new(MemoryMetricStorage::new()),
        Arc::new(MemoryMetricStorage::new()),
    ));
    let collector = Collector::new(Arc::clone(&service));
    let host = report_host(&cfg.address);
    let reporter = Reporter::new(Arc::clone(&service), Arc::new(HttpSink::new(host.clone())));

    tracing::info!(
        %host,
        poll_interval = cfg.poll_interval,
        report_interval = cfg.report_interval,
        "vitals-agent starting"
    );

    let scheduler = Scheduler::new(
        collector,
        reporter,
        Duration::from_secs(cfg.poll_interval),
        Duration::from_secs(cfg.report_interval),
    );
    scheduler.run().await?;
    Ok(())
}
