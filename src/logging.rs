//! Logging setup for the `lanzou` binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to whoever embeds it. The binary calls [`init`] once at startup.

use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    prelude::*,
};

/// Log to stderr, filtering according to `RUST_LOG` and defaulting to WARN so
/// the interactive menu stays readable. `RUST_LOG=lanzou_cli=trace` shows
/// each request URL, its timing and the raw response body.
pub fn init() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var("RUST_LOG")
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
