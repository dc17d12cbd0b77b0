//! Tracing subscriber setup for the CLI.
//!
//! Diagnostics go to stderr so stdout stays clean for `--json` output.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the verbosity flags pick the
/// level (quiet=error, default=warn, -v=info, -vv=debug, -vvv=trace).
/// Safe to call more than once.
pub fn init_logging(verbose: u8, quiet: bool) {
    INIT.call_once(|| {
        let default_level = if quiet {
            "error"
        } else {
            match verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        };
        let filter =
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_string());

        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    });
}
