#![forbid(unsafe_code)]

pub mod cli;
pub mod error;

pub use cli::run_from_env;
pub use error::{CliError, Result};

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `GRIDSPLIT_LOG=debug`.
pub const LOG_ENV: &str = "GRIDSPLIT_LOG";

/// Install the stderr log subscriber. Defaults to `warn`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
