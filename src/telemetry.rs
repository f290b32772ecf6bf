//! Log output. Library code logs through the `log` facade; the subscriber
//! bridges those records into `tracing`.

use tracing_subscriber::{fmt, EnvFilter};

/// `RUST_LOG` takes precedence over the configured level.
pub fn init(default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Ignore the error if a subscriber is already installed (tests).
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init();
}
