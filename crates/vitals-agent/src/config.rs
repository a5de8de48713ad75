//! Agent configuration: command-line flags with environment override.
//!
//! Precedence is environment > flag > flag default. clap's own `env`
//! support resolves the other way around (flag beats env), so the
//! override step is applied by hand after parsing.

use clap::Parser;

use vitals_core::{Result, VitalsError};

#[derive(Debug, Parser)]
#[command(name = "vitals-agent", about = "Metrics collection agent")]
struct Flags {
    /// Server address to report to.
    #[arg(short = 'a', default_value = "localhost:8080")]
    address: String,

    /// Seconds between collection ticks.
    #[arg(short = 'p', default_value_t = 2)]
    poll_interval: u64,

    /// Seconds between report cycles.
    #[arg(short = 'r', default_value_t = 10)]
    report_interval: u64,

    /// Log level for the tracing subscriber.
    #[arg(short = 'l', default_value = "info")]
    log_level: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub address: String,
    pub poll_interval: u64,
    pub report_interval: u64,
    pub log_level: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::with_env(Flags::parse(), |key| std::env::var(key).ok())
    }

    fn with_env(flags: Flags, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut cfg = Config {
            address: flags.address,
            poll_interval: flags.poll_interval,
            report_interval: flags.report_interval,
            log_level: flags.log_level,
        };
        if let Some(address) = env("ADDRESS").filter(|v| !v.is_empty()) {
            cfg.address = address;
        }
        if let Some(secs) = env("POLL_INTERVAL").filter(|v| !v.is_empty()) {
            cfg.poll_interval = parse_interval("POLL_INTERVAL", &secs)?;
        }
        if let Some(secs) = env("REPORT_INTERVAL").filter(|v| !v.is_empty()) {
            cfg.report_interval = parse_interval("REPORT_INTERVAL", &secs)?;
        }
        Ok(cfg)
    }
}

fn parse_interval(key: &str, value: &str) -> Result<u64> {
    value
        .parse()
        .map_err(|_| VitalsError::Internal(format!("invalid {key}: {value}")))
}
