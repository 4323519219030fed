//! Logging setup for the `folio` binary.
//!
//! Library crates log through the `log` facade; the subscriber installed
//! here also captures those records.

use tracing_subscriber::EnvFilter;

/// Pick the log filter: `RUST_LOG` wins, then `--verbose`, then the
/// configured level.
pub fn filter_directive(env_filter: Option<&str>, verbose: bool, configured: &str) -> String {
    match env_filter {
        Some(directive) if !directive.trim().is_empty() => directive.to_string(),
        _ if verbose => "debug".to_string(),
        _ => configured.to_string(),
    }
}

/// Install the global fmt subscriber.
pub fn init(verbose: bool, configured_level: &str) -> anyhow::Result<()> {
    let env_filter = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = filter_directive(env_filter.as_deref(), verbose, configured_level);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&directive)?)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise logging: {e}"))
}
