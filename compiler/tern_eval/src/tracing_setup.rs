//! Opt-in tracing subscriber for embedders and tests.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `TERN_LOG` (or `RUST_LOG`).
///
/// Does nothing when neither variable is set, and only ever runs once.
/// If the embedder already installed a global subscriber, that one wins.
///
/// ```text
/// TERN_LOG=tern_eval=debug        # loop entry/exit, branches, changes
/// TERN_LOG=tern_eval::lang=trace  # one line per executed statement
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let directives = std::env::var("TERN_LOG").or_else(|_| std::env::var("RUST_LOG"));
        if let Ok(directives) = directives {
            let filter = EnvFilter::new(directives);
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
