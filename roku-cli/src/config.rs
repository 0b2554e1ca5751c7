use crate::logging;
use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use roku_api::{TransportConfig, DEFAULT_PORT};
use std::time::Duration;

/// Roku remote control
///
/// Sends keypresses and app launches to a Roku device and prints the
/// results of its status queries.
#[derive(Parser, Debug)]
#[command(name = "roku")]
#[command(about = "Control a Roku device over its local ECP HTTP API")]
#[command(version)]
pub struct Args {
    /// Device host name or IP address (or ROKU_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// ECP port
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Connect and read timeout in seconds
    #[arg(short, long, default_value = "10")]
    pub timeout: u64,

    /// Log level or filter directive, e.g. `debug` or `roku_api=trace`
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Press a key, e.g. `Home`, `VolumeUp` or `Lit_a`
    Key { code: String },
    /// Launch an app by channel id
    Launch { app_id: String },
    /// Show device information
    Info,
    /// Show the app in the foreground
    ActiveApp,
    /// List installed apps
    Apps,
    /// Show media player status
    Player,
}

/// Configuration derived from command line arguments and environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub timeout: Duration,
    pub log_level: String,
    pub command: Command,
}

impl Config {
    /// Parse the command line and apply `ROKU_*` environment overrides
    pub fn from_env() -> Result<Self> {
        Self::resolve(Args::parse(), |name| std::env::var(name).ok())
    }

    /// Apply environment overrides from `lookup` to `args` and validate
    ///
    /// `ROKU_HOST` only fills in a missing `--host`; `ROKU_PORT` and
    /// `ROKU_TIMEOUT` replace the flag values. The log filter comes from
    /// `ROKU_LOG_LEVEL`, then `RUST_LOG`, then `--log-level`.
    pub fn resolve(mut args: Args, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if args.host.is_none() {
            args.host = lookup("ROKU_HOST");
        }

        if let Some(port) = lookup("ROKU_PORT") {
            args.port = port
                .parse()
                .context("Invalid ROKU_PORT environment variable")?;
        }

        if let Some(timeout) = lookup("ROKU_TIMEOUT") {
            args.timeout = timeout
                .parse()
                .context("Invalid ROKU_TIMEOUT environment variable")?;
        }

        if let Some(log_level) = lookup("ROKU_LOG_LEVEL").or_else(|| lookup("RUST_LOG")) {
            args.log_level = log_level;
        }

        let host = args
            .host
            .filter(|host| !host.trim().is_empty())
            .ok_or_else(|| anyhow!("No device host given; pass --host or set ROKU_HOST"))?;

        if args.port == 0 {
            return Err(anyhow!("Port must not be 0"));
        }

        if args.timeout == 0 {
            return Err(anyhow!("Timeout must be positive"));
        }

        logging::create_env_filter(&args.log_level)?;

        Ok(Self {
            host,
            port: args.port,
            timeout: Duration::from_secs(args.timeout),
            log_level: args.log_level,
            command: args.command,
        })
    }

    pub fn transport_config(&self) -> TransportConfig {
        TransportConfig::default()
            .with_connect_timeout(self.timeout)
            .with_read_timeout(self.timeout)
    }
}
