//! Diagnostic logging for sls.
//!
//! Diagnostics go to stderr so they never interleave with the table on stdout.
//! The filter comes from `SLS_LOG` (e.g. `SLS_LOG=debug`) and defaults to `warn`.

use tracing_subscriber::{EnvFilter, fmt};

pub const LOG_ENV: &str = "SLS_LOG";

pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}
