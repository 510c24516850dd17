pub mod dump;
pub mod error;
pub mod exit;
pub mod repl;
pub mod report;
pub mod scanner;
pub mod source;

use std::sync::Once;

// Re-export error types for convenience
pub use error::{GloxError, ScanError};
pub use exit::ExitStatus;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=glox=debug` or
/// `RUST_LOG=glox=trace` (per-token events).
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
