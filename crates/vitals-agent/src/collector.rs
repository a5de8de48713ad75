//! Host statistics collection.
//!
//! Each poll tick samples a fixed set of 27 named host/process statistics
//! as gauges, one `RandomValue` gauge, and advances the `PollCount`
//! counter by one. Everything lands in the agent-local stores; the wire
//! is the reporter's job.

use std::sync::Arc;

use sysinfo::{CpuExt, DiskExt, NetworkExt, NetworksExt, ProcessExt, System, SystemExt};

use vitals_core::service::MetricService;
use vitals_core::{MetricKind, Result, VitalsError};

/// Counter incremented once per collection tick, reset after each
/// successful report.
pub const POLL_COUNT: &str = "PollCount";
/// Gauge resampled uniformly from [0,1) on every tick.
pub const RANDOM_VALUE: &str = "RandomValue";

pub struct Collector {
    service: Arc<MetricService>,
    sys: System,
}

impl Collector {
    pub fn new(service: Arc<MetricService>) -> Self {
        Self {
            service,
            sys: System::new_all(),
        }
    }

    /// One poll tick: refresh, write every sampled gauge, bump PollCount.
    ///
    /// A store error here means a previously stored value was corrupted;
    /// it propagates instead of crashing the process.
    pub fn collect(&mut self) -> Result<()> {
        for (name, value) in self.sample() {
            self.service.set_value(MetricKind::Gauge, name, &value)?;
        }
        self.service.set_value(
            MetricKind::Gauge,
            RANDOM_VALUE,
            &format!("{:.6}", rand::random::<f64>()),
        )?;
        self.service.set_value(MetricKind::Counter, POLL_COUNT, "1")
    }

    /// Zero the accumulated PollCount after a successful report.
    ///
    /// The store contract has no delete; counter adds are signed, so the
    /// reset is an add of the negated current value.
    pub fn reset_poll_count(&self) -> Result<()> {
        let Some(value) = self.service.get_value(MetricKind::Counter, POLL_COUNT) else {
            return Ok(());
        };
        let count: i64 = value
            .parse()
            .map_err(|_| VitalsError::InvalidValue(value.clone()))?;
        if count == 0 {
            return Ok(());
        }
        self.service
            .set_value(MetricKind::Counter, POLL_COUNT, &(-count).to_string())
    }

    fn sample(&mut self) -> Vec<(&'static str, String)> {
        self.sys.refresh_all();

        let load = self.sys.load_average();
        let cpu = self.sys.global_cpu_info();
        let process = sysinfo::get_current_pid()
            .ok()
            .and_then(|pid| self.sys.process(pid));

        let (disk_total, disk_available) = self
            .sys
            .disks()
            .iter()
            .fold((0u64, 0u64), |(total, available), disk| {
                (total + disk.total_space(), available + disk.available_space())
            });
        let (net_received, net_transmitted) = self
            .sys
            .networks()
            .iter()
            .fold((0u64, 0u64), |(rx, tx), (_, data)| {
                (rx + data.total_received(), tx + data.total_transmitted())
            });

        vec![
            ("TotalMemory", self.sys.total_memory().to_string()),
            ("UsedMemory", self.sys.used_memory().to_string()),
            ("FreeMemory", self.sys.free_memory().to_string()),
            ("AvailableMemory", self.sys.available_memory().to_string()),
            ("TotalSwap", self.sys.total_swap().to_string()),
            ("UsedSwap", self.sys.used_swap().to_string()),
            ("FreeSwap", self.sys.free_swap().to_string()),
            ("LoadAverage1", format!("{:.6}", load.one)),
            ("LoadAverage5", format!("{:.6}", load.five)),
            ("LoadAverage15", format!("{:.6}", load.fifteen)),
            ("CpuCount", self.sys.cpus().len().to_string()),
            (
                "PhysicalCoreCount",
                self.sys.physical_core_count().unwrap_or(0).to_string(),
            ),
            ("GlobalCpuUsage", format!("{:.6}", cpu.cpu_usage())),
            ("CpuFrequency", cpu.frequency().to_string()),
            ("SystemUptime", self.sys.uptime().to_string()),
            ("BootTime", self.sys.boot_time().to_string()),
            ("ProcessCount", self.sys.processes().len().to_string()),
            (
                "ProcessMemory",
                process.map_or(0, ProcessExt::memory).to_string(),
            ),
            (
                "ProcessVirtualMemory",
                process.map_or(0, ProcessExt::virtual_memory).to_string(),
            ),
            (
                "ProcessCpuUsage",
                format!("{:.6}", process.map_or(0.0, ProcessExt::cpu_usage)),
            ),
            (
                "ProcessRunTime",
                process.map_or(0, ProcessExt::run_time).to_string(),
            ),
            (
                "ProcessStartTime",
                process.map_or(0, ProcessExt::start_time).to_string(),
            ),
            ("TotalDiskSpace", disk_total.to_string()),
            ("AvailableDiskSpace", disk_available.to_string()),
            (
                "UsedDiskSpace",
                disk_total.saturating_sub(disk_available).to_string(),
            ),
            ("NetworkReceived", net_received.to_string()),
            ("NetworkTransmitted", net_transmitted.to_string()),
        ]
    }
}
