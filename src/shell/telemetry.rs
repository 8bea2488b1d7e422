// Logging setup for the process.
//
// Purpose
// - Install one global tracing subscriber for the binary.
//
// Responsibilities
// - Read the filter from RUST_LOG, falling back to `info`.
// - Keep repeated initialisation harmless.

use tracing_subscriber::{EnvFilter, fmt};

/// Initialise logging for the process from `RUST_LOG`, falling back to `info`.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber may already be installed; keep it and ignore the error.
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}
