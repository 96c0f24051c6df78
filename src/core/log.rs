use anyhow::{Context, Result};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, filter::Targets, fmt, prelude::__tracing_subscriber_SubscriberExt,
    util::SubscriberInitExt,
};

/// Installs the global subscriber. Logs go to stderr so they never interleave
/// with converter output on stdout; `RUST_LOG` overrides the `--verbose` level.
pub fn init_logging(verbose: bool) -> Result<()> {
    let level_filter = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::OFF
    };
    let crate_filter = Targets::new().with_target(env!("CARGO_CRATE_NAME"), level_filter);
    let env_filter = EnvFilter::builder()
        .with_default_directive(level_filter.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(fmt::layer().pretty().without_time().with_writer(std::io::stderr))
        .with(crate_filter)
        .with(env_filter)
        .try_init()
        .context("Failed to install the log subscriber")
}
