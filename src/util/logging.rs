//! Logging utilities for hookgen
//!
//! Log output goes to stderr so that stdout only carries generated code.

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

// Initialize logging once
static INIT: Once = Once::new();

/// Initialize the tracing system
///
/// This function sets up tracing with an `EnvFilter` that:
/// - Honors the `RUST_LOG` environment variable if set
/// - Logs at debug level if `verbose` is set or `HOOKGEN_DEBUG` is present
/// - Only logs warnings and errors otherwise
pub fn init_logging(verbose: bool) {
	INIT.call_once(|| {
		let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
			if verbose || std::env::var_os("HOOKGEN_DEBUG").is_some() {
				EnvFilter::new("hookgen=debug")
			} else {
				EnvFilter::new("hookgen=warn")
			}
		});

		// Another subscriber may already be installed by an embedding program
		let _ = tracing_subscriber::registry()
			.with(fmt::layer().with_target(true).with_writer(std::io::stderr))
			.with(filter)
			.try_init();
	});
}

/// Get the current log level as a string
///
/// This function returns the current log level as a string:
/// - "trace" - Trace level
/// - "debug" - Debug level
/// - "info" - Info level
/// - "warn" - Warning level
/// - "error" - Error level
/// - "off" - Logging is disabled
#[must_use]
pub fn log_level() -> &'static str {
	if tracing::level_enabled!(tracing::Level::TRACE) {
		"trace"
	} else if tracing::level_enabled!(tracing::Level::DEBUG) {
		"debug"
	} else if tracing::level_enabled!(tracing::Level::INFO) {
		"info"
	} else if tracing::level_enabled!(tracing::Level::WARN) {
		"warn"
	} else if tracing::level_enabled!(tracing::Level::ERROR) {
		"error"
	} else {
		"off"
	}
}
