//! Tracing subscriber initialization with structured logging.
//!
//! # Usage
//!
//! ```no_run
//! // Human-readable output at the default level
//! rizz_observe::tracing_setup::init_tracing(0, false, false).unwrap();
//!
//! // JSON lines, debug for rizz crates
//! rizz_observe::tracing_setup::init_tracing(1, false, true).unwrap();
//! ```

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Filter directive for a CLI verbosity level.
///
/// `quiet` only matters at verbosity 0; an explicit `-v` wins over it.
pub fn default_filter(verbose: u8, quiet: bool) -> &'static str {
    match verbose {
        0 if quiet => "error",
        0 => "warn",
        1 => "info,rizz=debug",
        _ => "trace",
    }
}

/// Initialize the global tracing subscriber.
///
/// - Respects `RUST_LOG` when set; otherwise derives the filter from
///   `verbose` and `quiet` via [`default_filter`].
/// - Writes to stderr so command output on stdout stays machine-readable.
/// - `json` switches the `fmt` layer to one JSON object per event.
///
/// # Errors
///
/// Returns an error if the global subscriber has already been set or if
/// `RUST_LOG` holds an invalid directive.
pub fn init_tracing(verbose: u8, quiet: bool, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) if !directives.is_empty() => EnvFilter::try_new(directives)?,
        _ => EnvFilter::new(default_filter(verbose, quiet)),
    };

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    }

    Ok(())
}
