//! Log subscriber setup.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

/// Picks the filter directive: `-v` wins, then `RUST_LOG`, then the config.
fn filter(config_level: &str, verbose: u8) -> anyhow::Result<EnvFilter> {
    let forced = match verbose {
        0 => None,
        1 => Some("debug"),
        _ => Some("trace"),
    };

    if let Some(level) = forced {
        return Ok(EnvFilter::new(level));
    }

    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(config_level)
            .with_context(|| format!("invalid log_level: {config_level}")),
    }
}

/// Installs a stderr `fmt` subscriber so log lines never mix with results on stdout.
pub fn init(config_level: &str, verbose: u8) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(config_level, verbose)?)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))
}
