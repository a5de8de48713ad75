//! Server configuration: command-line flags with environment override.
//!
//! Precedence is environment > flag > flag default, matching the agent.
//! clap's own `env` support resolves the other way around (flag beats
//! env), so the override step is applied by hand after parsing.

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "vitals-server", about = "Metrics collection server")]
struct Flags {
    /// Address and port to listen on.
    #[arg(short = 'a', default_value = ":8080")]
    address: String,

    /// Log level for the tracing subscriber.
    #[arg(short = 'l', default_value = "info")]
    log_level: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub address: String,
    pub log_level: String,
}

impl Config {
    pub fn load() -> Self {
        Self::with_env(Flags::parse(), |key| std::env::var(key).ok())
    }

    fn with_env(flags: Flags, env: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Config {
            address: flags.address,
            log_level: flags.log_level,
        };
        if let Some(address) = env("ADDRESS").filter(|v| !v.is_empty()) {
            cfg.address = address;
        }
        cfg
    }

    /// A bare `:port` address binds every interface.
    pub fn listen_addr(&self) -> String {
        if self.address.starts_with(':') {
            format!("0.0.0.0{}", self.address)
        } else {
            self.address.clone()
        }
    }
}
