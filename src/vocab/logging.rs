//! Logging bootstrap.
//!
//! The library only emits through the `log` facade, as `event=... key=value`
//! lines. The binary calls [`init_logging`] once to route those records to
//! stderr; stdout stays reserved for command output.
//!
//! # Invariants
//! - Initialization happens at most once per process; later calls are no-ops.
//! - Initialization never panics.
//! - `RUST_LOG`, when set, overrides the level chosen here.

use flexi_logger::{Logger, LoggerHandle};
use log::debug;
use once_cell::sync::OnceCell;

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

/// Level used when `RUST_LOG` is not set.
pub fn default_level(verbose: bool) -> &'static str {
    if verbose {
        "info"
    } else {
        "warn"
    }
}

/// Starts the stderr logger. Returns a human-readable error when the
/// backend cannot be started.
pub fn init_logging(verbose: bool) -> Result<(), String> {
    LOGGER
        .get_or_try_init(|| {
            let handle = Logger::try_with_env_or_str(default_level(verbose))
                .map_err(|err| format!("invalid log specification: {err}"))?
                .log_to_stderr()
                .start()
                .map_err(|err| format!("failed to start logger: {err}"))?;
            debug!(
                "event=logging_ready version={}",
                env!("CARGO_PKG_VERSION")
            );
            Ok::<_, String>(handle)
        })
        .map(|_| ())
}
