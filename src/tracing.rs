//! Tracing initialization.

use std::sync::Once;
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

static INIT: Once = Once::new();

/// Initialize tracing to stderr, filtered by `RUST_LOG`. Safe to call multiple times.
///
/// `verbose` raises the default level from `warn` to `debug`; an explicit
/// `RUST_LOG` directive still wins for its target.
pub fn init(verbose: bool) {
    INIT.call_once(|| {
        let default_level = if verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        };
        let filter = EnvFilter::builder()
            .with_default_directive(default_level.into())
            .from_env_lossy();

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_target(true)
            .with_span_events(FmtSpan::NONE)
            .compact()
            .with_writer(std::io::stderr);

        if let Err(e) = builder.try_init() {
            eprintln!("Failed to initialize tracing: {}", e)
        }
    });
}
