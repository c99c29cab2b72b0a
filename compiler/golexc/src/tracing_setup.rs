//! Tracing subscriber setup for the CLI.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a hierarchical subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set, and nothing after the first call.
/// The layer writes to stderr, so formatted source on stdout stays clean.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        }
    });
}
