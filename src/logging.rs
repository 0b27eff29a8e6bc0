use std::io;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Sets up diagnostic logging for the application.
///
/// Diagnostics go to stderr and are opt-in through the conventional
/// `RUST_LOG` filter; with nothing configured the subscriber emits nothing,
/// leaving stdout to carry the resolved path alone. There is no log file:
/// this binary must not touch the filesystem.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            fmt::Layer::new()
                .with_writer(io::stderr)
                .with_ansi(false)
                .with_filter(EnvFilter::from_default_env()),
        )
        .init();
}
