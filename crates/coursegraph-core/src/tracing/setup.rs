//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "COURSEGRAPH_LOG";

/// Initialize logging for the batch job.
///
/// Reads `COURSEGRAPH_LOG` for per-crate log levels.
/// Format: `COURSEGRAPH_LOG=coursegraph_views=debug,coursegraph_storage=warn`
///
/// Falls back to `info` if `COURSEGRAPH_LOG` is not set or is invalid.
/// Output goes to stderr so stdout stays free for command output.
///
/// Idempotent.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(true),
            )
            .with(filter)
            .init();
    });
}
