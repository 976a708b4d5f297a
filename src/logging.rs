use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::Result;

fn env_filter(quiet: bool) -> EnvFilter {
    let directive = if quiet {
        "multi_dropdown=error"
    } else {
        "multi_dropdown=info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
}

/// Initialize logging to stderr.
///
/// When `quiet` is true, only error-level events are emitted.
/// `RUST_LOG` overrides the default directive. A subscriber that is already
/// installed (tests, or a host embedding the library) is kept.
pub fn init_logging(quiet: bool) {
    let res = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(env_filter(quiet))
        .try_init();
    if let Err(e) = res {
        debug!(error = %e, "keeping existing tracing subscriber");
    }
}

/// Initialize logging to an append-only file, for use while the terminal UI
/// owns the screen.
pub fn init_file_logging(path: &Path, quiet: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let res = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(env_filter(quiet))
        .try_init();
    if let Err(e) = res {
        debug!(error = %e, path = %path.display(), "keeping existing tracing subscriber");
    }
    Ok(())
}
