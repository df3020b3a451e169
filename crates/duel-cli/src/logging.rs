//! Logging setup.
//!
//! Logs go to stderr so they never interleave with the battle on stdout.
//! `RUST_LOG` selects the level; without it only warnings are shown.

use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
pub fn setup_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
