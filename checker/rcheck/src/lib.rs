//! `rcheck` command handlers.
//!
//! The binary in `main.rs` only dispatches; every command lives in
//! [`commands`] and returns the text to print, so the handlers can be tested
//! without spawning the binary.

pub mod commands;
pub mod options;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=rcheck_verify=debug`
/// or `RUST_LOG=rcheck_decl=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}
