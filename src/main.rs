mod application;
mod cli;
mod construction;
mod data;
mod domain;
mod error;
mod infra;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

/// Build the log filter from a RUST_LOG value.
/// `fa_concat=info` applies only when RUST_LOG is unset or empty.
fn log_filter(rust_log: Option<&str>) -> Result<EnvFilter> {
    Ok(EnvFilter::builder()
        .with_default_directive("fa_concat=info".parse()?)
        .parse_lossy(rust_log.unwrap_or_default()))
}

fn main() -> Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    // Logs go to stderr so stdout carries only the resulting NFA
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(rust_log.as_deref())?)
        .init();

    let cli = Cli::parse();
    cli.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_info_when_rust_log_unset() {
        let filter = log_filter(None).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_rust_log_debug_enables_debug() {
        let filter = log_filter(Some("debug")).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_crate_debug_directive_enables_debug() {
        let filter = log_filter(Some("fa_concat=debug")).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }
}
